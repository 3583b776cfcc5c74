use crate::dataset::Dataset;
use crate::params::Parameters;
use crate::plot::{render_svg, PlotError, PlotRenderer, PlotSize};
use crate::session::{format_mse, format_param};
use crate::stats::{compute_mse, LinReg};

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug)]
pub struct Config {
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    Mse(Parameters),
    Render(Render),
    Fit { json: bool },
    Points { json: bool },
}

#[derive(Debug, Clone)]
pub struct Render {
    pub params: Parameters,
    pub size: PlotSize,
    pub output: PathBuf,
}

#[derive(Debug, Serialize)]
struct FitReport {
    slope: f64,
    intercept: f64,
    mse: Option<f64>,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("plot error: {0}")]
    Plot(#[from] PlotError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Msg(String),
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&Dataset::sample(), &mut out)
    }

    /// Run against `data`, writing command output to `out`.
    pub fn run_with<W: Write>(&self, data: &Dataset, out: &mut W) -> Result<(), CmdError> {
        match &self.action {
            Action::Mse(p) => run_mse(data, *p, out),
            Action::Render(r) => run_render(data, r, out),
            Action::Fit { json } => run_fit(data, *json, out),
            Action::Points { json } => run_points(data, *json, out),
        }
    }
}

/* =================== Actions =================== */

fn run_mse<W: Write>(data: &Dataset, p: Parameters, out: &mut W) -> Result<(), CmdError> {
    let mse = compute_mse(data.points(), p.slope, p.intercept);
    writeln!(out, "{}", format_mse(mse))?;
    Ok(())
}

fn run_render<W: Write>(data: &Dataset, r: &Render, out: &mut W) -> Result<(), CmdError> {
    let renderer = PlotRenderer::new(r.size);
    let svg = render_svg(&renderer, data.points(), r.params)?;
    fs::write(&r.output, svg)?;
    log::info!("wrote {}x{} chart to {}", r.size.width, r.size.height, r.output.display());

    let mse = compute_mse(data.points(), r.params.slope, r.params.intercept);
    writeln!(
        out,
        "{} slope={} intercept={} mse={}",
        r.output.display(),
        format_param(r.params.slope),
        format_param(r.params.intercept),
        format_mse(mse)
    )?;
    Ok(())
}

fn run_fit<W: Write>(data: &Dataset, json: bool, out: &mut W) -> Result<(), CmdError> {
    let fit = LinReg::fit(data).ok_or_else(|| {
        CmdError::Msg(format!("no least-squares line for {} point(s)", data.len()))
    })?;
    let report = FitReport {
        slope: fit.slope,
        intercept: fit.intercept,
        mse: compute_mse(data.points(), fit.slope, fit.intercept),
    };
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "slope:     {:.6}", report.slope)?;
        writeln!(out, "intercept: {:.6}", report.intercept)?;
        writeln!(out, "mse:       {}", format_mse(report.mse))?;
    }
    Ok(())
}

fn run_points<W: Write>(data: &Dataset, json: bool, out: &mut W) -> Result<(), CmdError> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
    } else {
        for p in data.points() {
            writeln!(out, "{}\t{}", p.x, p.y)?;
        }
    }
    Ok(())
}
