use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::{Action, Config, Render};
use crate::params::{ParameterStore, Parameters, INTERCEPT_RANGE, SLOPE_RANGE};
use crate::plot::PlotSize;

#[derive(Debug, Parser)]
#[command(
    name = "lintune",
    about = "Interactive Linear Regression Tuner",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the mean squared error of a line against the dataset
    Mse(ParamArgs),

    /// Draw the scatter plot and line into an SVG file
    Render(RenderArgs),

    /// Print the least-squares line for the dataset
    Fit(OutputArgs),

    /// Print the dataset
    Points(OutputArgs),
}

#[derive(Debug, Args)]
pub struct ParamArgs {
    /// Slope (m), -5 to 5 in steps of 0.01
    #[arg(short = 'm', long, default_value_t = SLOPE_RANGE.default, allow_negative_numbers = true)]
    pub slope: f64,

    /// Y-intercept (b), -10 to 10 in steps of 0.1
    #[arg(short = 'b', long, default_value_t = INTERCEPT_RANGE.default, allow_negative_numbers = true)]
    pub intercept: f64,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Chart width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,

    /// Output SVG path
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath, value_name = "FILE")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ParamArgs {
    /// Run the requested values through the same rules as the sliders.
    pub fn resolve(&self) -> Parameters {
        let mut store = ParameterStore::new();
        store.set_slope(self.slope);
        store.set_intercept(self.intercept);
        let params = store.params();
        if params.slope != self.slope {
            log::warn!("slope {} adjusted to {}", self.slope, params.slope);
        }
        if params.intercept != self.intercept {
            log::warn!("intercept {} adjusted to {}", self.intercept, params.intercept);
        }
        params
    }
}

impl Cli {
    pub fn into_config(self) -> Config {
        let action = match self.command {
            Commands::Mse(args) => Action::Mse(args.resolve()),
            Commands::Render(args) => Action::Render(Render {
                params: args.params.resolve(),
                size: PlotSize::new(args.width, args.height),
                output: args.output,
            }),
            Commands::Fit(out) => Action::Fit { json: out.json },
            Commands::Points(out) => Action::Points { json: out.json },
        };
        Config { action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lintune", "mse"]).unwrap();
        match cli.into_config().action {
            Action::Mse(p) => assert_eq!(p, Parameters::new(1., 2.)),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_negative_values() {
        let cli = Cli::try_parse_from(["lintune", "mse", "-m", "-2.5", "--intercept", "-7"]).unwrap();
        match cli.into_config().action {
            Action::Mse(p) => assert_eq!(p, Parameters::new(-2.5, -7.)),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_clamped() {
        let cli = Cli::try_parse_from(["lintune", "mse", "--slope", "9", "--intercept=-30"]).unwrap();
        match cli.into_config().action {
            Action::Mse(p) => assert_eq!(p, Parameters::new(5., -10.)),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_render_requires_output() {
        assert!(Cli::try_parse_from(["lintune", "render"]).is_err());
        let cli =
            Cli::try_parse_from(["lintune", "render", "-o", "chart.svg", "--width", "320"]).unwrap();
        match cli.into_config().action {
            Action::Render(r) => {
                assert_eq!(r.size, PlotSize::new(320, 400));
                assert_eq!(r.output, PathBuf::from("chart.svg"));
            },
            other => panic!("unexpected action {other:?}"),
        }
    }
}
