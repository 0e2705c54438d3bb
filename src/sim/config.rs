use anyhow::{Result, bail};

/// Detector configuration variant for one run.
///
/// Selects the tower geometry and the vertex fluctuation means, or disables
/// the acceptance cut entirely ([`RunType::All`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunType {
    /// Large tower on the beam center (detector shifted down).
    Tl,
    /// Small tower on the beam center.
    Ts,
    /// Detector in the top position.
    Top,
    /// No acceptance cut: every generated event is recorded.
    All,
}

impl RunType {
    /// Resolves a run-type name from the run configuration.
    ///
    /// Matching is case-insensitive and substring-based, checked in
    /// priority order TL, TS, TOP, ALL (first match wins). A name matching
    /// none of them is a fatal configuration error.
    pub fn parse(name: &str) -> Result<Self> {
        let upper = name.to_uppercase();
        if upper.contains("TL") {
            Ok(Self::Tl)
        } else if upper.contains("TS") {
            Ok(Self::Ts)
        } else if upper.contains("TOP") {
            Ok(Self::Top)
        } else if upper.contains("ALL") {
            Ok(Self::All)
        } else {
            bail!("wrong run type {name:?} (expected TL, TS, TOP or ALL)")
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Tl => "TL",
            Self::Ts => "TS",
            Self::Top => "TOP",
            Self::All => "ALL",
        }
    }

    /// Integer id written to the run header.
    pub fn index(self) -> i32 {
        match self {
            Self::Tl => 0,
            Self::Ts => 1,
            Self::Top => 2,
            Self::All => 3,
        }
    }
}

/// Hadronic interaction model driving the external generator.
///
/// The core never interprets the model beyond labeling the output; an
/// unsupported generator code is fatal before any output is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    QgsjetIii01,
    Sibyll,
    EposLhcR,
    EposLhcRFast,
    QgsjetIi04,
}

impl Model {
    /// Resolves the generator's numeric model code.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            13 => Ok(Self::QgsjetIii01),
            6 => Ok(Self::Sibyll),
            0 => Ok(Self::EposLhcR),
            1 => Ok(Self::EposLhcRFast),
            7 => Ok(Self::QgsjetIi04),
            other => bail!("no supported model for code {other}"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::QgsjetIii01 => "QGSJETIII01",
            Self::Sibyll => "SIBYLL",
            Self::EposLhcR => "EPOSLHCR",
            Self::EposLhcRFast => "EPOSLHCR_FAST",
            Self::QgsjetIi04 => "QGSJETII04",
        }
    }

    /// Integer id written to the run header.
    pub fn index(self) -> i32 {
        match self {
            Self::QgsjetIii01 => 1,
            Self::Sibyll => 2,
            Self::EposLhcR => 3,
            Self::EposLhcRFast => 4,
            Self::QgsjetIi04 => 5,
        }
    }
}

/// Run configuration consumed by the simulation core.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub run_type: RunType,
    pub model: Model,
    /// Seed for the vertex fluctuation generator; fixed seed gives a
    /// bit-for-bit reproducible run.
    pub seed: u64,
    /// Number of accepted events to produce before stopping.
    pub n_events: u64,
    /// Optional job index appended to the output name.
    pub job_index: Option<String>,
}

impl RunConfig {
    /// Stem of the output file name, e.g. `crmc_EPOSLHCR_TS_3`.
    pub fn output_stem(&self) -> String {
        let mut stem = format!("crmc_{}_{}", self.model.name(), self.run_type.name());
        if let Some(job) = &self.job_index {
            stem.push('_');
            stem.push_str(job);
        }
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(RunType::parse("ts").unwrap(), RunType::Ts);
        assert_eq!(RunType::parse("Top2017").unwrap(), RunType::Top);
        assert_eq!(RunType::parse("all").unwrap(), RunType::All);
    }

    #[test]
    fn test_parse_priority_order() {
        // TL is checked before TS, TOP and ALL
        assert_eq!(RunType::parse("TLTS").unwrap(), RunType::Tl);
        assert_eq!(RunType::parse("allTL").unwrap(), RunType::Tl);
        assert_eq!(RunType::parse("TSTOP").unwrap(), RunType::Ts);
    }

    #[test]
    fn test_parse_unknown_is_fatal() {
        assert!(RunType::parse("north").is_err());
        assert!(RunType::parse("").is_err());
    }

    #[test]
    fn test_model_codes() {
        assert_eq!(Model::from_code(13).unwrap(), Model::QgsjetIii01);
        assert_eq!(Model::from_code(0).unwrap(), Model::EposLhcR);
        assert_eq!(Model::from_code(7).unwrap(), Model::QgsjetIi04);
        assert!(Model::from_code(99).is_err());
    }

    #[test]
    fn test_output_stem() {
        let cfg = RunConfig {
            run_type: RunType::Ts,
            model: Model::Sibyll,
            seed: 1,
            n_events: 10,
            job_index: Some("7".to_string()),
        };
        assert_eq!(cfg.output_stem(), "crmc_SIBYLL_TS_7");
    }
}
