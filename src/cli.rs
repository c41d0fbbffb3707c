use clap::Parser;

/// Enrich CycloneDX SBOM components with regulatory metadata properties
#[derive(Parser, Debug)]
#[command(name = "bom-enrich")]
#[command(version)]
#[command(
    about = "Enrich CycloneDX SBOM components with regulatory metadata properties",
    long_about = None
)]
pub struct Args {
    /// Path to the CycloneDX JSON document to enrich
    pub input: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to an end-of-life override mapping (JSON)
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<String>,

    /// Config file path (bom-enrich.config.yml is auto-discovered when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let args = Args::try_parse_from(["bom-enrich", "bom.json"]).unwrap();
        assert_eq!(args.input, "bom.json");
        assert_eq!(args.output, None);
        assert_eq!(args.overrides, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "bom-enrich",
            "bom.json",
            "-o",
            "enriched.json",
            "--overrides",
            "eol.json",
            "-c",
            "custom.yml",
        ])
        .unwrap();
        assert_eq!(args.output.as_deref(), Some("enriched.json"));
        assert_eq!(args.overrides.as_deref(), Some("eol.json"));
        assert_eq!(args.config.as_deref(), Some("custom.yml"));
    }

    #[test]
    fn test_missing_input_is_error() {
        assert!(Args::try_parse_from(["bom-enrich"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_error() {
        assert!(Args::try_parse_from(["bom-enrich", "bom.json", "--nope"]).is_err());
    }
}
