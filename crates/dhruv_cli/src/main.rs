mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dhruv_varga::{
    ALL_RASHIS, BaseChart, Dms, Mode, Rashi, SHODASHAVARGA, SignPosition, VargaConfig, VargaKind,
    VargaRequest, assemble_request, assemble_shodashavarga, shape, varga_placement,
    whole_sign_house,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "dhruv", about = "Dhruv divisional chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Divisional sign of one sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Chart kind (D1..D60, e.g. D9)
        #[arg(long)]
        kind: VargaKind,
        /// parasara or continuous (D2, D3, D4, D24 only)
        #[arg(long)]
        mode: Option<Mode>,
        /// Print the placement as JSON
        #[arg(long)]
        json: bool,
    },
    /// Whole-sign house of a body sign from an ascendant sign
    House {
        /// Ascendant sign: index 0-11 or name (Mesha / Aries)
        #[arg(long)]
        asc: String,
        /// Body sign: index 0-11 or name
        #[arg(long)]
        body: String,
    },
    /// One derived chart from a base chart JSON file
    Chart {
        /// Base chart JSON: {"Ascendant": 67.3987, "Sun": 152.81, ...}
        #[arg(long)]
        input: PathBuf,
        /// Chart kind (D1..D60)
        #[arg(long)]
        kind: VargaKind,
        /// Mode override; takes precedence over --config
        #[arg(long)]
        mode: Option<Mode>,
        /// TOML file with per-kind modes
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// All sixteen divisional charts from a base chart JSON file
    Report {
        /// Base chart JSON file
        #[arg(long)]
        input: PathBuf,
        /// TOML file with per-kind modes
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List supported chart kinds
    Kinds,
}

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Varga {
            lon,
            kind,
            mode,
            json,
        } => {
            debug!(%kind, ?mode, lon, "varga placement");
            let p = varga_placement(lon, kind, mode)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&p)?);
            } else {
                let natal = SignPosition::from_longitude(lon)?;
                println!("D1: {natal} ({})", natal.rashi().western_name());
                let rashi = Rashi::from_index(p.sign_index);
                let division = p
                    .division
                    .map_or_else(|| "-".to_string(), |d| d.to_string());
                println!(
                    "{}{}: {} {} ({})  division {}",
                    kind.id(),
                    mode_label(VargaRequest { kind, mode }.effective_mode()?),
                    rashi.name(),
                    Dms::from_degrees(p.varga_degrees),
                    rashi.western_name(),
                    division,
                );
            }
        }

        Commands::House { asc, body } => {
            let asc = parse_sign(&asc)?;
            let body = parse_sign(&body)?;
            println!("{}", whole_sign_house(asc.index(), body.index()));
        }

        Commands::Chart {
            input,
            kind,
            mode,
            config,
        } => {
            let base = load_base_chart(&input)?;
            let config = load_config(config.as_deref())?;
            let request = VargaRequest {
                kind,
                mode: mode.or(config.mode_for(kind)),
            };
            debug!(%kind, mode = ?request.mode, "assembling chart");
            let chart = assemble_request(&base, &request)
                .with_context(|| format!("assembling {kind} from {}", input.display()))?;
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }

        Commands::Report { input, config } => {
            let base = load_base_chart(&input)?;
            let config = load_config(config.as_deref())?;
            let charts = assemble_shodashavarga(&base, &config)
                .with_context(|| format!("assembling report from {}", input.display()))?;
            info!(charts = charts.len(), "report assembled");
            println!("{}", serde_json::to_string_pretty(&charts)?);
        }

        Commands::Kinds => {
            for kind in SHODASHAVARGA {
                let modes = if kind.accepts_mode() {
                    "parasara, continuous"
                } else {
                    "-"
                };
                let shape_name = format!("{:?}", shape(kind, None)?);
                println!(
                    "{:<4} {:>2}  {:<16} {:<15} {}",
                    kind.id(),
                    kind.divisions(),
                    kind.sanskrit_name(),
                    shape_name,
                    modes
                );
            }
        }
    }
    Ok(())
}

fn mode_label(mode: Option<Mode>) -> String {
    mode.map_or_else(String::new, |m| format!(" ({m})"))
}

/// Sign from a 0-based index or a Sanskrit / Western name.
fn parse_sign(s: &str) -> Result<Rashi> {
    let s = s.trim();
    if let Ok(idx) = s.parse::<u8>() {
        if idx > 11 {
            bail!("invalid sign index: {idx} (0-11)");
        }
        return Ok(Rashi::from_index(idx));
    }
    ALL_RASHIS
        .iter()
        .copied()
        .find(|r| r.name().eq_ignore_ascii_case(s) || r.western_name().eq_ignore_ascii_case(s))
        .with_context(|| format!("invalid sign: {s}"))
}

fn load_base_chart(path: &Path) -> Result<BaseChart> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading base chart {}", path.display()))?;
    let base = serde_json::from_str(&text)
        .with_context(|| format!("parsing base chart {}", path.display()))?;
    debug!(path = %path.display(), "base chart loaded");
    Ok(base)
}

fn load_config(path: Option<&Path>) -> Result<VargaConfig> {
    let Some(path) = path else {
        return Ok(VargaConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config = VargaConfig::from_toml_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!(?config, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sign_by_index_and_name() {
        assert_eq!(parse_sign("0").unwrap(), Rashi::Mesha);
        assert_eq!(parse_sign("Karka").unwrap(), Rashi::Karka);
        assert_eq!(parse_sign("scorpio").unwrap(), Rashi::Vrischika);
        assert!(parse_sign("12").is_err());
        assert!(parse_sign("Ophiuchus").is_err());
    }

    #[test]
    fn missing_config_is_default() {
        assert_eq!(load_config(None).unwrap(), VargaConfig::default());
    }

    #[test]
    fn cli_parses_chart_command() {
        let cli = Cli::try_parse_from([
            "dhruv", "chart", "--input", "base.json", "--kind", "D24", "--mode", "continuous",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { kind, mode, .. } => {
                assert_eq!(kind, VargaKind::D24);
                assert_eq!(mode, Some(Mode::Continuous));
            }
            _ => panic!("expected chart command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["dhruv", "varga", "10", "--kind", "D11"]).is_err());
    }
}
