use thiserror::Error;

/// Errors raised while configuring a language.
///
/// Generation itself never fails: every rejected candidate is retried
/// internally. Only a structurally invalid configuration is reported,
/// and it is reported up front so the generation loops never see it.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("phoneme class '{0}' cannot be empty")]
	EmptyClass(char),

	#[error("'{0}' cannot be used as a phoneme class label")]
	InvalidLabel(char),

	#[error("invalid syllable structure: {0:?}")]
	InvalidStructure(String),

	#[error("syllable structure references undefined phoneme class '{0}'")]
	UndefinedClass(char),

	#[error("invalid restriction pattern {pattern:?}: {source}")]
	InvalidRestriction {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("invalid {what} range: min {min} > max {max}")]
	InvalidRange { what: &'static str, min: usize, max: usize },
}
