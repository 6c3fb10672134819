use anyhow::Result;
use is_terminal::IsTerminal;

use distpack::presentation::output::{check_result_json, render_check_text};
use distpack::presentation::{create_check_use_case, Cli};

pub fn cmd_check(cli: &Cli) -> Result<()> {
    let (project_root, config, warnings) = super::load_project(cli)?;

    let result = create_check_use_case().execute(&config, &warnings, &project_root);

    if cli.json {
        println!("{}", serde_json::to_string(&check_result_json(&result))?);
    } else {
        print!(
            "{}",
            render_check_text(&result, std::io::stdout().is_terminal())
        );
    }

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
