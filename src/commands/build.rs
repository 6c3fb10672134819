use anyhow::Result;

use distpack::presentation::output::build_report_json;
use distpack::presentation::{create_build_use_case, create_event_sink, Cli};

pub fn cmd_build(cli: &Cli) -> Result<()> {
    let (project_root, config, _warnings) = super::load_project(cli)?;

    let use_case = create_build_use_case(&config, cli.json);
    let events = create_event_sink(cli.json, cli.verbose);

    match use_case.execute_with_events(&config, &project_root, events) {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string(&build_report_json(&report))?);
            }
            Ok(())
        }
        Err(err) if err.source.is_fatal_compile() => {
            // Nothing after the compile stage ran
            eprintln!("error: {}", err.source);
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
