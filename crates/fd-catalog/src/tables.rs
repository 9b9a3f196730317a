//! Static phrase tables. Keys are lowercase; new rows are additive.

pub(crate) const TYPE_PHRASES: &[(&str, &str)] = &[
    (
        "input_table",
        "Reads structured data from a flat, delimited or fixed-width source and makes it available to the graph.",
    ),
    (
        "output_table",
        "Writes structured data out to a flat or delimited target for downstream consumption.",
    ),
    ("input_file", "Ingests raw files into the processing pipeline."),
    ("output_file", "Persists processed records to a target file location."),
    ("reformat", "Transforms each input record to a new structure or layout."),
    ("filter", "Removes records that do not satisfy specified business rules."),
    ("join", "Combines records from multiple inputs by matching keys."),
    ("rollup", "Aggregates data to produce grouped totals or statistics."),
    (
        "sort",
        "Orders records on specified keys to guarantee sequence for downstream steps.",
    ),
    ("dedup", "Eliminates duplicate records according to business keys."),
    ("lookup", "Enriches a record stream with reference data."),
    ("normalize", "Explodes hierarchical or repeating groups into flat rows."),
];

pub(crate) const FALLBACK_TYPE_PHRASE: &str = "Performs a specialized data-processing step.";

pub(crate) const PARAM_NAMES: &[(&str, &str)] = &[
    ("filename", "File path"),
    ("record_format", "Record layout"),
    ("delimiter", "Field delimiter"),
    ("transform", "Transformation logic"),
    ("key", "Key field(s)"),
    ("keys", "Key field(s)"),
    ("join_type", "Join type"),
    ("reject_limit", "Maximum share of rejected records"),
];
