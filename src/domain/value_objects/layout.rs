//! Distribution Layout Value Object
//!
//! Every path the pipeline reads from or writes to under the distribution
//! root is derived here, so the minify stage and the manifest rewrite always
//! agree on file names.

use std::fmt;
use std::path::{Path, PathBuf};

/// Module format emitted by the packager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleFormat {
    /// Legacy universal module bundle (`bundles/`)
    Umd,
    /// ES5 ECMAScript module (`esm5/`)
    Esm5,
    /// ES2015 ECMAScript module (`esm2015/`)
    Esm2015,
}

impl ModuleFormat {
    pub const ALL: [ModuleFormat; 3] = [ModuleFormat::Umd, ModuleFormat::Esm5, ModuleFormat::Esm2015];

    /// Output directory name under the distribution root
    pub fn dir_name(&self) -> &'static str {
        match self {
            ModuleFormat::Umd => "bundles",
            ModuleFormat::Esm5 => "esm5",
            ModuleFormat::Esm2015 => "esm2015",
        }
    }

    /// Manifest field holding this format's entry point
    pub fn manifest_field(&self) -> &'static str {
        match self {
            ModuleFormat::Umd => "main",
            ModuleFormat::Esm5 => "module",
            ModuleFormat::Esm2015 => "es2015",
        }
    }

    /// Whether the bundle is an ES module (as opposed to a plain script)
    pub fn is_module(&self) -> bool {
        !matches!(self, ModuleFormat::Umd)
    }

    fn infix(&self) -> &'static str {
        match self {
            ModuleFormat::Umd => ".umd",
            ModuleFormat::Esm5 | ModuleFormat::Esm2015 => "",
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Paths of one module format's bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePaths {
    pub format: ModuleFormat,
    /// Bundle as emitted by the packager
    pub file: PathBuf,
    /// Source map emitted next to the bundle
    pub map_file: PathBuf,
    /// Minified bundle
    pub min_file: PathBuf,
}

/// Layout of the distribution directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistLayout {
    root: PathBuf,
    name: String,
    stylesheet_name: String,
    images_dir: String,
}

impl DistLayout {
    /// Create a layout rooted at `root`.
    ///
    /// `name` is the bundle basename (e.g. `areo-ionic-selectable`),
    /// `stylesheet_name` the stylesheet basename without extension and
    /// `images_dir` the directory name images are copied into.
    pub fn new(
        root: impl Into<PathBuf>,
        name: impl Into<String>,
        stylesheet_name: impl Into<String>,
        images_dir: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
            stylesheet_name: stylesheet_name.into(),
            images_dir: images_dir.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Published package manifest
    pub fn manifest(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// File name of the bundle emitted by the packager
    pub fn file_name(&self, format: ModuleFormat) -> String {
        format!("{}{}.js", self.name, format.infix())
    }

    /// File name of the minified bundle
    pub fn min_file_name(&self, format: ModuleFormat) -> String {
        format!("{}{}.min.js", self.name, format.infix())
    }

    pub fn bundle(&self, format: ModuleFormat) -> BundlePaths {
        let dir = self.root.join(format.dir_name());
        let file_name = self.file_name(format);
        BundlePaths {
            format,
            file: dir.join(&file_name),
            map_file: dir.join(format!("{}.map", file_name)),
            min_file: dir.join(self.min_file_name(format)),
        }
    }

    /// Manifest entry point for `format`, relative to the distribution root.
    ///
    /// Always uses forward slashes, whatever the host platform.
    pub fn entry_point(&self, format: ModuleFormat) -> String {
        format!("{}/{}", format.dir_name(), self.min_file_name(format))
    }

    /// Intermediate files removed once minification succeeded
    pub fn intermediates(&self) -> Vec<PathBuf> {
        let umd = self.bundle(ModuleFormat::Umd);
        vec![
            umd.file,
            umd.map_file,
            self.bundle(ModuleFormat::Esm5).file,
            self.bundle(ModuleFormat::Esm2015).file,
        ]
    }

    /// Verbatim stylesheet copy, where the component runtime resolves it
    pub fn stylesheet_copy(&self) -> PathBuf {
        self.root
            .join(ModuleFormat::Esm5.dir_name())
            .join(format!("{}.scss", self.stylesheet_name))
    }

    /// Compressed stylesheet for demo consumption
    pub fn stylesheet_min(&self) -> PathBuf {
        self.root
            .join(ModuleFormat::Esm5.dir_name())
            .join(format!("{}.min.css", self.stylesheet_name))
    }

    /// Root of the copied image tree
    pub fn images(&self) -> PathBuf {
        self.root.join(&self.images_dir)
    }
}
