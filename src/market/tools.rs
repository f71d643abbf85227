//! The six read-only CoinMarketCap query tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::tools::{ParamSchema, ToolHandler};

use super::MarketClient;

const LISTINGS_SORT_FIELDS: &[&str] = &[
    "name",
    "symbol",
    "date_added",
    "market_cap",
    "market_cap_strict",
    "price",
    "circulating_supply",
    "total_supply",
    "max_supply",
    "num_market_pairs",
    "volume_24h",
    "percent_change_1h",
    "percent_change_24h",
    "percent_change_7d",
    "market_cap_by_total_supply_strict",
    "volume_7d",
    "volume_30d",
];

/// One declared tool bound to one GET path.
pub struct MarketTool {
    name: &'static str,
    path: &'static str,
    description: &'static str,
    schema: ParamSchema,
    client: MarketClient,
}

#[async_trait]
impl ToolHandler for MarketTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn schema(&self) -> &ParamSchema {
        &self.schema
    }

    async fn call(&self, args: Map<String, Value>) -> Result<Value> {
        self.client.get(self.name, self.path, &args).await
    }
}

/// Build the full tool set for a market-data agent.
pub fn market_tools(client: &MarketClient) -> Vec<Arc<dyn ToolHandler>> {
    vec![
        Arc::new(categories(client.clone())),
        Arc::new(category(client.clone())),
        Arc::new(id_map(client.clone())),
        Arc::new(metadata(client.clone())),
        Arc::new(listings_latest(client.clone())),
        Arc::new(quotes_latest(client.clone())),
    ]
}

fn categories(client: MarketClient) -> MarketTool {
    MarketTool {
        name: "categories",
        path: "/v1/cryptocurrency/categories",
        description: "Returns information about all coin categories available, \
            including a paginated list of cryptocurrency quotes and metadata from each category.",
        schema: ParamSchema::object()
            .integer("start", "1-based offset into the paginated list of items.", false)
            .integer("limit", "Number of results to return (1..5000).", false)
            .string(
                "symbol",
                "Filter categories by one or more comma-separated cryptocurrency symbols, e.g. \"BTC,ETH\".",
                true,
            )
            .build(),
        client,
    }
}

fn category(client: MarketClient) -> MarketTool {
    MarketTool {
        name: "category",
        path: "/v1/cryptocurrency/category",
        description: "Returns information about a single coin category, including a \
            paginated list of the cryptocurrency quotes and metadata for the category.",
        schema: ParamSchema::object()
            .string("id", "The category ID, as found via the categories tool.", true)
            .integer("start", "1-based offset into the paginated list of coins.", false)
            .integer("limit", "Number of coins to return (1..1000, default 100).", false)
            .string(
                "convert",
                "Comma-separated list of cryptocurrency or fiat symbols to return market quotes in.",
                false,
            )
            .build(),
        client,
    }
}

fn id_map(client: MarketClient) -> MarketTool {
    MarketTool {
        name: "id_map",
        path: "/v1/cryptocurrency/map",
        description: "Returns a mapping of all cryptocurrencies to unique CoinMarketCap ids. \
            Use these ids instead of symbols to identify cryptocurrencies unambiguously in \
            other queries. Includes first/last historical data timestamps per cryptocurrency.",
        schema: ParamSchema::object()
            .string(
                "listing_status",
                "Default \"active\". Pass \"inactive\" or \"untracked\" (or a comma-separated \
                 combination) to list cryptocurrencies in those states.",
                false,
            )
            .integer("start", "1-based offset into the paginated list of items.", false)
            .integer("limit", "Number of results to return (1..5000).", false)
            .string_enum("sort", "Field to sort the list by (default \"id\").", &["cmc_rank", "id"], false)
            .string(
                "symbol",
                "Comma-separated cryptocurrency symbols to return ids for; other options are \
                 ignored when this is passed.",
                false,
            )
            .string("aux", "Comma-separated list of supplemental data fields to include.", false)
            .build(),
        client,
    }
}

fn metadata(client: MarketClient) -> MarketTool {
    MarketTool {
        name: "metadata",
        path: "/v2/cryptocurrency/info",
        description: "Returns all static metadata for one or more cryptocurrencies: logo, \
            description, official website, social links, and technical documentation links.",
        schema: ParamSchema::object()
            .string(
                "symbol",
                "One or more comma-separated cryptocurrency symbols, e.g. \"BTC,ETH\".",
                true,
            )
            .boolean(
                "skip_invalid",
                "Pass true to skip invalid lookups instead of failing the whole request.",
                false,
            )
            .string("aux", "Comma-separated list of supplemental data fields to include.", false)
            .build(),
        client,
    }
}

fn listings_latest(client: MarketClient) -> MarketTool {
    MarketTool {
        name: "listings_latest",
        path: "/v1/cryptocurrency/listings/latest",
        description: "Returns a paginated list of all active cryptocurrencies with latest \
            market data, ordered by market cap by default. Supports numeric range filters \
            and alternative sort fields; use \"convert\" to return values in other currencies.",
        schema: ParamSchema::object()
            .integer("start", "1-based offset into the paginated list of items.", false)
            .integer("limit", "Number of results to return (1..5000, default 100).", false)
            .number("price_min", "Minimum USD price to filter results by.", false)
            .number("price_max", "Maximum USD price to filter results by.", false)
            .number("market_cap_min", "Minimum market cap to filter results by.", false)
            .number("market_cap_max", "Maximum market cap to filter results by.", false)
            .number("volume_24h_min", "Minimum 24 hour USD volume to filter results by.", false)
            .number("volume_24h_max", "Maximum 24 hour USD volume to filter results by.", false)
            .number("circulating_supply_min", "Minimum circulating supply to filter results by.", false)
            .number("circulating_supply_max", "Maximum circulating supply to filter results by.", false)
            .number("percent_change_24h_min", "Minimum 24 hour percent change (>= -100).", false)
            .number("percent_change_24h_max", "Maximum 24 hour percent change (>= -100).", false)
            .number(
                "self_reported_circulating_supply_min",
                "Minimum self-reported circulating supply to filter results by.",
                false,
            )
            .number(
                "self_reported_circulating_supply_max",
                "Maximum self-reported circulating supply to filter results by.",
                false,
            )
            .number(
                "self_reported_market_cap_min",
                "Minimum self-reported market cap to filter results by.",
                false,
            )
            .number(
                "self_reported_market_cap_max",
                "Maximum self-reported market cap to filter results by.",
                false,
            )
            .number("unlocked_market_cap_min", "Minimum unlocked market cap to filter results by.", false)
            .number("unlocked_market_cap_max", "Maximum unlocked market cap to filter results by.", false)
            .number(
                "unlocked_circulating_supply_min",
                "Minimum unlocked circulating supply to filter results by.",
                false,
            )
            .number(
                "unlocked_circulating_supply_max",
                "Maximum unlocked circulating supply to filter results by.",
                false,
            )
            .string(
                "convert",
                "Comma-separated list of cryptocurrency or fiat symbols to return market quotes in.",
                false,
            )
            .string_enum(
                "sort",
                "Field to sort the list of cryptocurrencies by (default \"market_cap\").",
                LISTINGS_SORT_FIELDS,
                false,
            )
            .string_enum("sort_dir", "Direction to order against the sort field.", &["asc", "desc"], false)
            .string_enum(
                "cryptocurrency_type",
                "Type of cryptocurrency to include (default \"all\").",
                &["all", "coins", "tokens"],
                false,
            )
            .string_enum(
                "tag",
                "Tag of cryptocurrency to include (default \"all\").",
                &["all", "defi", "filesharing"],
                false,
            )
            .build(),
        client,
    }
}

fn quotes_latest(client: MarketClient) -> MarketTool {
    MarketTool {
        name: "quotes_latest",
        path: "/v2/cryptocurrency/quotes/latest",
        description: "Returns the latest market quote for one or more cryptocurrencies. \
            Use \"convert\" to return market values in other fiat or crypto currencies.",
        schema: ParamSchema::object()
            .string(
                "symbol",
                "One or more comma-separated cryptocurrency symbols, e.g. \"BTC,ETH\".",
                true,
            )
            .string(
                "convert",
                "Comma-separated list of cryptocurrency or fiat symbols to return market quotes in.",
                false,
            )
            .boolean(
                "skip_invalid",
                "Pass true to skip invalid lookups instead of failing the whole request.",
                false,
            )
            .build(),
        client,
    }
}
