use clap::Parser;
use log::info;
use optrans::{
    console::{Args, PartialArgs},
    error::OptResult,
};

fn main() -> OptResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    //parse CLI arguments
    let optrans_args = Args::try_from(PartialArgs::parse())?;

    //read or build the scenario and evaluate the derivation chain
    let scenario = optrans_args.scenario()?;
    info!("Evaluating scenario with {} precedence", scenario.precedence);
    let evaluation = scenario.evaluate()?;
    println!("{evaluation}");
    Ok(())
}
