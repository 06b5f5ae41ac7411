use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lifecycle_layout::LayoutMode;
use lifecycle_taxonomy::FileSource;
use lifecycle_tree::ExpansionDepth;
use lifecycle_viz::{ActionSpec, TracingSink, Viewer, VizConfig, VizError};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATA: &str = "data/lifecycle_data.json";

fn data_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("data")
            .long("data")
            .default_value(DEFAULT_DATA)
            .value_parser(value_parser!(PathBuf))
            .help("Taxonomy JSON file"),
    )
    .arg(
        Arg::new("config")
            .long("config")
            .value_parser(value_parser!(PathBuf))
            .help("TOML configuration file"),
    )
    .arg(
        Arg::new("depth")
            .long("depth")
            .value_parser(value_parser!(usize))
            .help("Levels expanded on load (1 shows the stages)"),
    )
    .arg(
        Arg::new("actions")
            .long("actions")
            .help("Comma-separated actions: control ids, click:<name>, pan:<dx>:<dy>, background"),
    )
}

fn cli() -> Command {
    Command::new("lifecycle-viz")
        .version(lifecycle_viz::VERSION)
        .about("Interactive research-data-lifecycle diagram")
        .subcommand_required(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            data_args(Command::new("render").about("Render the diagram as SVG"))
                .arg(
                    Arg::new("layout")
                        .long("layout")
                        .value_parser(LayoutMode::from_str)
                        .help("radial or linear"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Output file (stdout when omitted)"),
                ),
        )
        .subcommand(data_args(Command::new("tree").about("Print the visible hierarchy as an outline")))
        .subcommand(
            data_args(Command::new("details").about("Show the detail panel of one node")).arg(
                Arg::new("name")
                    .required(true)
                    .help("Node name"),
            ),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(args: &ArgMatches) -> anyhow::Result<VizConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => VizConfig::load(path)?,
        None => VizConfig::default(),
    };
    if let Some(&depth) = args.get_one::<usize>("depth") {
        config = config.with_initial_depth(ExpansionDepth(depth));
    }
    if let Ok(Some(&layout)) = args.try_get_one::<LayoutMode>("layout") {
        config = config.with_layout(layout);
    }
    Ok(config)
}

/// Load the viewer and replay `--actions`. `None` means the load failed and
/// the diagnostic has already been reported.
async fn open(args: &ArgMatches) -> anyhow::Result<Option<Viewer>> {
    let config = load_config(args)?;
    let actions = match args.get_one::<String>("actions") {
        Some(list) => ActionSpec::parse_list(list)?,
        None => Vec::new(),
    };
    let data = args
        .get_one::<PathBuf>("data")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA));

    let mut viewer = match Viewer::load(&FileSource::new(data), config, &TracingSink).await {
        Ok(viewer) => viewer,
        Err(VizError::Load(_)) => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    viewer.apply(&actions)?;
    viewer.renderer_mut().animator_mut().finish();
    Ok(Some(viewer))
}

async fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    match matches.subcommand() {
        Some(("render", args)) => {
            let Some(viewer) = open(args).await? else {
                return Ok(ExitCode::FAILURE);
            };
            match args.get_one::<PathBuf>("out") {
                Some(path) => {
                    tokio::fs::write(path, viewer.svg())
                        .await
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!(path = %path.display(), nodes = viewer.rendered_nodes(), "svg written");
                }
                None => println!("{}", viewer.svg()),
            }
        }
        Some(("tree", args)) => {
            let Some(viewer) = open(args).await? else {
                return Ok(ExitCode::FAILURE);
            };
            print!("{}", viewer.tree().outline());
        }
        Some(("details", args)) => {
            let Some(viewer) = open(args).await? else {
                return Ok(ExitCode::FAILURE);
            };
            let name = args
                .get_one::<String>("name")
                .context("missing node name")?;
            let id = viewer
                .tree()
                .find_by_name(name)
                .ok_or_else(|| VizError::UnknownNode(name.clone()))?;
            let table = lifecycle_viz::DetailsTable::for_node(viewer.tree(), id)?;
            print!("{table}");
        }
        _ => {
            cli().print_help()?;
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match run(&matches).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn parses_render_arguments() {
        let matches = cli()
            .try_get_matches_from(["lifecycle-viz", "render", "--layout", "linear", "--depth", "2", "--actions", "show-all"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let config = load_config(args).unwrap();
        assert_eq!(config.layout, LayoutMode::Linear);
        assert_eq!(config.initial_depth, ExpansionDepth::SUBSTAGES);
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(cli()
            .try_get_matches_from(["lifecycle-viz", "render", "--layout", "spiral"])
            .is_err());
    }
}
