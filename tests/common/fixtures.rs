//! Test fixtures: project inputs and what ng-packagr would emit.

pub const BUNDLE_NAME: &str = "areo-ionic-selectable";

pub const STYLESHEET_PATH: &str = "src/components/ionic-selectable.component.scss";

pub const STYLESHEET: &str = r#"$ionic-selectable-icon-size: 16px;

.ionic-selectable {
    display: block;

    .ionic-selectable-icon {
        width: $ionic-selectable-icon-size;
        height: $ionic-selectable-icon-size;
    }
}
"#;

/// distpack.toml pointing the packager at the fake script
pub const CONFIG: &str = r#"[project]
stylesheet = "src/components/ionic-selectable.component.scss"

[packager]
program = "sh"
script = "fake-ng-packagr.sh"
"#;

/// Shell stand-in for ng-packagr: checks its flags, then writes the
/// distribution the real packager would leave behind.
pub const FAKE_PACKAGER: &str = r#"set -e
[ "$1" = "-p" ] && [ -f "$2" ] || { echo "usage: -p <ng-package> -c <tsconfig>" >&2; exit 64; }
[ "$3" = "-c" ] && [ -f "$4" ] || { echo "usage: -p <ng-package> -c <tsconfig>" >&2; exit 64; }

mkdir -p dist/bundles dist/esm5 dist/esm2015

cat > dist/bundles/areo-ionic-selectable.umd.js <<'EOF'
(function (global, factory) {
    typeof exports === 'object' ? factory(exports) : factory(global.IonicSelectable = {});
}(this, function (exports) {
    'use strict';
    var VERSION = '4.4.1';
    exports.VERSION = VERSION;
}));
EOF
echo '{"version":3,"sources":[]}' > dist/bundles/areo-ionic-selectable.umd.js.map
echo "!function(e){e.VERSION='4.4.1'}(this);" > dist/bundles/areo-ionic-selectable.umd.min.js

cat > dist/esm5/areo-ionic-selectable.js <<'EOF'
var IonicSelectableComponent = /** @class */ (function () {
    function IonicSelectableComponent() {
        this.isOpened = false;
    }
    IonicSelectableComponent.prototype.open = function () {
        this.isOpened = true;
    };
    return IonicSelectableComponent;
}());
export { IonicSelectableComponent };
EOF

cat > dist/esm2015/areo-ionic-selectable.js <<'EOF'
class IonicSelectableComponent {
    constructor() {
        this.isOpened = false;
    }
    open() {
        this.isOpened = true;
    }
}
export { IonicSelectableComponent };
EOF

cat > dist/package.json <<'EOF'
{
  "name": "areo-ionic-selectable",
  "version": "4.4.1",
  "main": "bundles/areo-ionic-selectable.umd.js",
  "module": "esm5/areo-ionic-selectable.js",
  "es2015": "esm2015/areo-ionic-selectable.js",
  "typings": "areo-ionic-selectable.d.ts",
  "cordova": { "id": "areo-ionic-selectable" },
  "dependencies": { "tslib": "^1.9.0" },
  "devDependencies": { "ng-packagr": "^4.7.0" },
  "peerDependencies": { "@ionic/angular": "^4.0.0" }
}
EOF

echo "Built areo-ionic-selectable"
"#;

/// Fake packager that fails like a type error would
pub const FAILING_PACKAGER: &str = r#"echo "error TS2304: Cannot find name 'IonicSelectable'." >&2
exit 2
"#;

pub const IMAGES: &[(&str, &str)] = &[
    ("images/ionic-selectable.png", "PNG-BYTES"),
    ("images/icons/close.svg", "<svg><path d=\"M0 0\"/></svg>"),
];
