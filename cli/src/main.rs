use seedbank_cli::{argparse::parse_args, commands, config::Config, utils};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let mut config = Config::from_env()?;
    if cli.facility_id.is_some() {
        config.facility_id = cli.facility_id;
    }
    tracing::debug!("Using {:?}", config);

    let output = commands::handle_command(cli.command, &config)?;
    println!("{}", output);
    Ok(())
}
