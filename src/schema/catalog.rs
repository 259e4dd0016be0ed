//! The built-in node type catalog: financial data loaders, indicator
//! transforms, and report generators.

use serde_json::json;

use super::registry::{NodeTypeRegistry, NodeTypeSchema, ParamKind, ParameterSchema};

/// Declares one catalog entry. UI and backend type names are identical for
/// every built-in type; divergence is only supported for external catalogs.
fn entry(registry: &mut NodeTypeRegistry, ty: &str, label: &str, parameters: Vec<ParameterSchema>) {
    registry.register(
        ty,
        NodeTypeSchema {
            label: label.to_string(),
            backend_type: ty.to_string(),
            parameters,
        },
    );
}

pub(super) fn register_builtin_types(registry: &mut NodeTypeRegistry) {
    entry(
        registry,
        "LoadTickerData",
        "Load Ticker Data",
        vec![
            ParameterSchema::required("ticker", ParamKind::String),
            ParameterSchema::optional("start_date", ParamKind::String),
            ParameterSchema::optional("end_date", ParamKind::String),
        ],
    );
    entry(
        registry,
        "CalculateMovingAverage",
        "Calculate Moving Average",
        vec![
            ParameterSchema::with_default("window_size", ParamKind::Number, json!(20)),
            ParameterSchema::with_default("column", ParamKind::String, json!("close")),
        ],
    );
    entry(
        registry,
        "CalculateRSI",
        "Calculate RSI",
        vec![
            ParameterSchema::with_default("period", ParamKind::Number, json!(14)),
            ParameterSchema::with_default("column", ParamKind::String, json!("close")),
        ],
    );
    entry(
        registry,
        "CalculateMACD",
        "Calculate MACD",
        vec![
            ParameterSchema::with_default("fast_period", ParamKind::Number, json!(12)),
            ParameterSchema::with_default("slow_period", ParamKind::Number, json!(26)),
            ParameterSchema::with_default("signal_period", ParamKind::Number, json!(9)),
            ParameterSchema::with_default("column", ParamKind::String, json!("close")),
        ],
    );
    entry(
        registry,
        "Load10K",
        "Load 10K",
        vec![
            ParameterSchema::required("ticker", ParamKind::String),
            ParameterSchema::optional("year", ParamKind::Number),
        ],
    );
    entry(
        registry,
        "Summarize10K",
        "Summarize 10K",
        vec![
            ParameterSchema::with_default("section", ParamKind::String, json!("")),
            ParameterSchema::with_default("max_length", ParamKind::Number, json!(1000)),
        ],
    );
    entry(
        registry,
        "LoadIncomeStatement",
        "Load Income Statement",
        vec![
            ParameterSchema::with_default("period", ParamKind::String, json!("annual")),
            ParameterSchema::with_default("limit", ParamKind::Number, json!(10)),
        ],
    );
    entry(
        registry,
        "LoadBalanceSheet",
        "Load Balance Sheet",
        vec![
            ParameterSchema::with_default("period", ParamKind::String, json!("annual")),
            ParameterSchema::with_default("limit", ParamKind::Number, json!(10)),
        ],
    );
    entry(
        registry,
        "LoadCashFlow",
        "Load Cash Flow",
        vec![
            ParameterSchema::with_default("period", ParamKind::String, json!("annual")),
            ParameterSchema::with_default("limit", ParamKind::Number, json!(10)),
        ],
    );
    entry(registry, "PreprocessFinancials", "Preprocess Financials", vec![]);
    entry(
        registry,
        "SummarizeIncomeStatement",
        "Summarize Income Statement",
        vec![],
    );
    entry(
        registry,
        "GenerateLLMReport",
        "Generate LLM Report",
        vec![ParameterSchema::with_default(
            "report_type",
            ParamKind::String,
            json!("full"),
        )],
    );
}
