use clap::{Args, Parser, Subcommand};
use fp_fluids::report::{format_critical_point, format_error, format_property, format_saturation};
use fp_fluids::{
    CalcMode, CoolPropEngine, CriticalPoint, FluidCatalogEntry, FluidResult, PropertyEngine,
    PropertyId, Query, Saturation, filter_coolprop_catalog, query_critical_point,
    query_in_mode, query_saturation,
};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use uom::si::pressure::pascal;
use uom::si::thermodynamic_temperature::kelvin;

#[derive(Parser)]
#[command(name = "fp-cli")]
#[command(about = "Pure fluid property calculator (powered by CoolProp)", long_about = None)]
struct Cli {
    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Subcooled liquid / superheated vapour: any two of T, P, H, S
    SinglePhase(StateArgs),
    /// Multiphase / mixture region: any two of T, P, H, S, Q
    Multiphase(StateArgs),
    /// Saturation conditions (Q = 0) from a known temperature or pressure
    Saturation {
        /// Fluid name as known to CoolProp
        #[arg(long, default_value = "Water")]
        fluid: String,
        /// Known property (T in °C or P in bar)
        #[arg(long, default_value = "P")]
        known: PropertyId,
        /// Value of the known property
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        value: f64,
    },
    /// Critical temperature and pressure
    Critical {
        /// Fluid name as known to CoolProp
        #[arg(long, default_value = "Water")]
        fluid: String,
    },
    /// List common CoolProp fluid names
    Fluids {
        /// Optional search term (name or alias)
        query: Option<String>,
    },
    /// List the calculation modes and the properties each one accepts
    Modes,
}

/// Inputs shared by the two-property forms.
#[derive(Args, Debug)]
struct StateArgs {
    /// Fluid name as known to CoolProp
    #[arg(long, default_value = "Water")]
    fluid: String,
    /// First input property (T, P, H, S, Q)
    #[arg(long, default_value = "T")]
    input1: PropertyId,
    /// Value of the first input (°C, bar, kJ/kg, kJ/(kg K) or -)
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    value1: f64,
    /// Second input property
    #[arg(long, default_value = "P")]
    input2: PropertyId,
    /// Value of the second input
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    value2: f64,
    /// Property to compute
    #[arg(long, default_value = "H")]
    output: PropertyId,
}

impl StateArgs {
    fn to_query(&self) -> Query {
        Query::new(
            self.fluid.clone(),
            self.output,
            (self.input1, self.value1),
            (self.input2, self.value2),
        )
    }
}

/// What a command produced, ready for text or JSON rendering.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Outcome {
    Property {
        mode: CalcMode,
        query: Query,
        label: &'static str,
        value: f64,
    },
    Saturation {
        fluid: String,
        #[serde(flatten)]
        result: Saturation,
    },
    CriticalPoint {
        fluid: String,
        #[serde(flatten)]
        result: CriticalPoint,
        temperature_k: f64,
        pressure_pa: f64,
    },
    Fluids {
        entries: Vec<FluidCatalogEntry>,
    },
    Modes {
        modes: Vec<ModeSummary>,
    },
}

#[derive(Debug, Serialize)]
struct ModeSummary {
    mode: CalcMode,
    label: &'static str,
    inputs: &'static [PropertyId],
    outputs: &'static [PropertyId],
}

impl ModeSummary {
    fn of(mode: CalcMode) -> Self {
        Self {
            mode,
            label: mode.label(),
            inputs: mode.allowed_inputs(),
            outputs: mode.allowed_outputs(),
        }
    }
}

fn with_units(ids: &[PropertyId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| format!("{id} [{}]", id.display_unit()))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Outcome {
    fn render_text(&self) -> String {
        match self {
            Outcome::Property { query, value, .. } => format_property(query.output, *value),
            Outcome::Saturation { result, .. } => format_saturation(result),
            Outcome::CriticalPoint { result, .. } => format_critical_point(result),
            Outcome::Fluids { entries } => {
                if entries.is_empty() {
                    return "No matching fluids".to_string();
                }
                entries
                    .iter()
                    .map(|entry| format!("{:<14} {}", entry.coolprop_name, entry.display_name))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Outcome::Modes { modes } => modes
                .iter()
                .map(|m| {
                    format!(
                        "{}\n  inputs:  {}\n  outputs: {}",
                        m.label,
                        with_units(m.inputs),
                        with_units(m.outputs)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = CoolPropEngine::new();
    tracing::debug!(engine = engine.name(), json = cli.json, "engine ready");

    match run(&engine, cli.command) {
        Ok(outcome) => {
            if cli.json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: failed to serialize result: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", outcome.render_text());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if cli.json {
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            } else {
                eprintln!("{}", format_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(engine: &dyn PropertyEngine, command: Commands) -> FluidResult<Outcome> {
    match command {
        Commands::SinglePhase(args) => cmd_state(engine, CalcMode::SinglePhase, &args),
        Commands::Multiphase(args) => cmd_state(engine, CalcMode::Multiphase, &args),
        Commands::Saturation {
            fluid,
            known,
            value,
        } => {
            let result = query_saturation(engine, known, value, &fluid)?;
            Ok(Outcome::Saturation { fluid, result })
        }
        Commands::Critical { fluid } => {
            let result = query_critical_point(engine, &fluid)?;
            Ok(Outcome::CriticalPoint {
                fluid,
                temperature_k: result.temperature().get::<kelvin>(),
                pressure_pa: result.pressure().get::<pascal>(),
                result,
            })
        }
        Commands::Fluids { query } => Ok(Outcome::Fluids {
            entries: filter_coolprop_catalog(query.as_deref().unwrap_or("")),
        }),
        Commands::Modes => Ok(Outcome::Modes {
            modes: CalcMode::ALL.into_iter().map(ModeSummary::of).collect(),
        }),
    }
}

fn cmd_state(
    engine: &dyn PropertyEngine,
    mode: CalcMode,
    args: &StateArgs,
) -> FluidResult<Outcome> {
    let query = args.to_query();
    let value = query_in_mode(engine, mode, &query)?;
    Ok(Outcome::Property {
        mode,
        label: query.output.label(),
        query,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_fluids::FluidError;

    /// Answers every query with one SI value.
    struct FixedEngine(f64);

    impl PropertyEngine for FixedEngine {
        fn name(&self) -> &str {
            "fixed"
        }

        fn evaluate(
            &self,
            _output: PropertyId,
            _input1: PropertyId,
            _value1: f64,
            _input2: PropertyId,
            _value2: f64,
            fluid: &str,
        ) -> FluidResult<f64> {
            if fluid == "NotAFluid" {
                return Err(FluidError::engine("Unknown fluid NotAFluid"));
            }
            Ok(self.0)
        }

        fn lookup_constant(&self, _constant: PropertyId, _fluid: &str) -> FluidResult<f64> {
            Ok(self.0)
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fp-cli").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_match_the_calculator_forms() {
        let cli = parse(&["single-phase"]);
        let Commands::SinglePhase(args) = cli.command else {
            panic!("expected single-phase");
        };
        assert_eq!(args.fluid, "Water");
        assert_eq!((args.input1, args.value1), (PropertyId::T, 100.0));
        assert_eq!((args.input2, args.value2), (PropertyId::P, 1.0));
        assert_eq!(args.output, PropertyId::H);
        assert!(!cli.json);
    }

    #[test]
    fn property_codes_parse_case_insensitively() {
        let cli = parse(&[
            "multiphase",
            "--input2",
            "q",
            "--value2",
            "0.5",
            "--output",
            "cvmass",
            "--json",
        ]);
        let Commands::Multiphase(args) = cli.command else {
            panic!("expected multiphase");
        };
        assert_eq!(args.input2, PropertyId::Q);
        assert_eq!(args.output, PropertyId::Cvmass);
        assert!(cli.json);
    }

    #[test]
    fn unknown_property_code_is_a_usage_error() {
        assert!(Cli::try_parse_from(["fp-cli", "single-phase", "--output", "Z"]).is_err());
    }

    #[test]
    fn negative_values_are_accepted() {
        let cli = parse(&["saturation", "--known", "T", "--value", "-10"]);
        let Commands::Saturation { value, .. } = cli.command else {
            panic!("expected saturation");
        };
        assert_eq!(value, -10.0);
    }

    #[test]
    fn single_phase_renders_label_line() {
        let outcome = run(&FixedEngine(2_676_000.0), parse(&["single-phase"]).command).unwrap();
        assert_eq!(outcome.render_text(), "enthalpy [kJ/kg] = 2676.00000");
    }

    #[test]
    fn single_phase_refuses_quality() {
        let command = parse(&["single-phase", "--output", "Q"]).command;
        let err = run(&FixedEngine(0.0), command).unwrap_err();
        assert!(matches!(err, FluidError::NotAllowed { .. }));
    }

    #[test]
    fn engine_errors_reach_the_banner_unchanged() {
        let err = run(&FixedEngine(0.0), parse(&["single-phase", "--fluid", "NotAFluid"]).command)
            .unwrap_err();
        assert_eq!(format_error(&err), "Error: Unknown fluid NotAFluid");
    }

    #[test]
    fn critical_point_json_shape() {
        let outcome = run(&FixedEngine(373.15), parse(&["critical"]).command).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "critical_point");
        assert_eq!(json["fluid"], "Water");
        assert!((json["temperature_c"].as_f64().unwrap() - 100.0).abs() < 1e-9);
        assert!((json["temperature_k"].as_f64().unwrap() - 373.15).abs() < 1e-9);
        assert!((json["pressure_pa"].as_f64().unwrap() - 373.15).abs() < 1e-9);
    }

    #[test]
    fn modes_listing_shows_every_mode_with_units() {
        let outcome = run(&FixedEngine(0.0), parse(&["modes"]).command).unwrap();
        let text = outcome.render_text();
        for mode in CalcMode::ALL {
            assert!(text.contains(mode.label()), "{text}");
        }
        assert!(text.contains("  inputs:  T [°C], P [bar], H [kJ/kg], S [kJ/(kg K)]\n"));
        assert!(text.contains("Tcrit [°C], Pcrit [bar]"));

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "modes");
        assert_eq!(json["modes"][1]["mode"], "multiphase");
        assert_eq!(json["modes"][1]["inputs"][4], "Q");
    }

    #[test]
    fn fluids_listing_filters() {
        let outcome = run(&FixedEngine(0.0), parse(&["fluids", "r134"]).command).unwrap();
        assert!(outcome.render_text().contains("R134a"));
    }
}
