//! Recommend command implementation for the platepick CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use platepick_core::{MemoryCatalogue, Recommendation};
use platepick_data::{RecommendQuery, Recommender, UNKNOWN_CLIENT};
use serde::{Deserialize, Serialize};

use crate::catalogue::load_catalogue;
use crate::{ARG_CATALOGUE, CliError, ENV_RECOMMEND_CATALOGUE, Outcome, require_existing, write_json};

/// CLI arguments for the `recommend` subcommand.
///
/// Preference values stay as text until the query is parsed so that the
/// command reports the same errors as any other caller of the recommender.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank every restaurant in a CSV catalogue against the given \
                 preferences and print the best matches as JSON. Unset \
                 preferences default to the neutral midpoint.",
    about = "Rank a catalogue for the given preferences"
)]
#[ortho_config(prefix = "PLATEPICK")]
pub(crate) struct RecommendArgs {
    /// Path to the CSV catalogue.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Desired heaviness, 0 (light) to 100 (rich).
    #[arg(long, value_name = "0-100")]
    #[serde(default)]
    pub(crate) heavy: Option<String>,
    /// Hunger level matched against portion size, 0 to 100.
    #[arg(long, value_name = "0-100")]
    #[serde(default)]
    pub(crate) hungry: Option<String>,
    /// Desired formality, 0 (casual) to 100 (fine dining).
    #[arg(long, value_name = "0-100")]
    #[serde(default)]
    pub(crate) finedine: Option<String>,
    /// Comma-separated cuisine tags.
    #[arg(long, value_name = "tags")]
    #[serde(default)]
    pub(crate) cuisine: Option<String>,
    /// Maximum acceptable price level.
    #[arg(long = "max-price", value_name = "1-4")]
    #[serde(default)]
    pub(crate) max_price: Option<String>,
    /// Penalise kitchens slower than twenty minutes.
    #[arg(long = "fast-only", value_name = "bool")]
    #[serde(default)]
    pub(crate) fast_only: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) query: RecommendQuery,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_RECOMMEND_CATALOGUE,
        })?;
        let query = RecommendQuery {
            heavy: args.heavy,
            hungry: args.hungry,
            finedine: args.finedine,
            cuisine: args.cuisine,
            max_price: args.max_price,
            fast_only: args.fast_only,
        };
        Ok(Self { catalogue, query })
    }
}

#[derive(Debug, Serialize)]
struct RecommendResponse<'a> {
    items: &'a [Recommendation],
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<Outcome, CliError> {
    let config = args.into_config()?;
    let items = execute_recommend(&config)?;
    write_json(writer, &RecommendResponse { items: &items })?;
    Ok(Outcome::Completed)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<Vec<Recommendation>, CliError> {
    require_existing(&config.catalogue, ARG_CATALOGUE)?;
    let import = load_catalogue(&config.catalogue)?;
    if !import.success() {
        log::warn!(
            "ranking {} restaurants; {} catalogue rows were rejected",
            import.restaurants.len(),
            import.errors.len()
        );
    }
    let recommender = Recommender::new(MemoryCatalogue::with_restaurants(import.restaurants));
    let items = recommender.recommend(UNKNOWN_CLIENT, &config.query)?;
    log::debug!("ranked {} recommendations", items.len());
    Ok(items)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
