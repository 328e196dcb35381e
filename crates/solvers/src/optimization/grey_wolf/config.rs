use super::Error;

const DEFAULT_POPULATION_SIZE: usize = 200;
const DEFAULT_ITERATIONS: usize = 200;

/// Configuration for the grey wolf solver.
///
/// With the `serde` feature enabled, a config can be read from any serde
/// format. Deserialization runs the same validation as [`Config::new`], and
/// omitted fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConfigFields")
)]
pub struct Config {
    population_size: usize,
    iterations: usize,
    seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

impl Config {
    /// Creates a config for `population_size` candidates moved over
    /// `iterations` iterations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPopulation`] if either count is zero.
    pub fn new(population_size: usize, iterations: usize) -> Result<Self, Error> {
        if population_size == 0 || iterations == 0 {
            return Err(Error::InvalidPopulation {
                population_size,
                iterations,
            });
        }

        Ok(Self {
            population_size,
            iterations,
            seed: None,
        })
    }

    /// Returns a copy of this config that seeds every random stream from `seed`.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Returns the number of candidates in the population.
    #[must_use]
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Returns the number of iterations per run.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the seed, if the run is reproducible.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFields {
    population_size: usize,
    iterations: usize,
    seed: Option<u64>,
}

#[cfg(feature = "serde")]
impl Default for ConfigFields {
    fn default() -> Self {
        let config = Config::default();
        Self {
            population_size: config.population_size,
            iterations: config.iterations,
            seed: config.seed,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ConfigFields> for Config {
    type Error = Error;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        let config = Self::new(fields.population_size, fields.iterations)?;
        Ok(match fields.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_regression_settings() {
        let config = Config::default();

        assert_eq!(config.population_size(), 200);
        assert_eq!(config.iterations(), 200);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn rejects_empty_population() {
        assert!(matches!(
            Config::new(0, 10),
            Err(Error::InvalidPopulation {
                population_size: 0,
                iterations: 10
            })
        ));
    }

    #[test]
    fn rejects_zero_iterations() {
        assert!(matches!(
            Config::new(10, 0),
            Err(Error::InvalidPopulation { iterations: 0, .. })
        ));
    }

    #[test]
    fn with_seed_keeps_counts() {
        let config = Config::new(12, 34).unwrap().with_seed(56);

        assert_eq!(config.population_size(), 12);
        assert_eq!(config.iterations(), 34);
        assert_eq!(config.seed(), Some(56));
    }
}
