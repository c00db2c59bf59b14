use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info, info_span, warn};

use intake_cli::config::Settings;
use intake_cli::report::{IngestReport, NormalizedValue, normalize_values};
use intake_ingest::{Decoding, IngestOptions, check_upload_size, ingest_table, load_table};

use crate::cli::{IngestArgs, NormalizeArgs};

pub fn run_normalize(args: &NormalizeArgs, settings: &Settings) -> Vec<NormalizedValue> {
    let order = args.order.resolve(settings.date_order);
    let today = Local::now().date_naive();
    let results = normalize_values(&args.values, order, today);
    let failed = results.iter().filter(|value| !value.is_ok()).count();
    info!(
        values = results.len(),
        failed,
        order = order.label(),
        "normalized values"
    );
    results
}

pub fn run_ingest(args: &IngestArgs, settings: &Settings) -> Result<IngestReport> {
    let path = &args.file;
    let span = info_span!("ingest", file = %path.display());
    let _guard = span.enter();

    let order = args.order.resolve(settings.date_order);
    let policy = args.policy.map_or(settings.commit_policy, Into::into);
    let encoding = args.encoding.as_deref().unwrap_or(&settings.encoding);
    let max_size = args.max_bytes.unwrap_or(settings.max_upload_bytes);

    let size = fs::metadata(path)
        .with_context(|| format!("read metadata for {}", path.display()))?
        .len();
    check_upload_size(size, max_size)?;
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;

    let table = load_table(&bytes, encoding).with_context(|| format!("load {}", path.display()))?;
    log_decoding(encoding, &table.decoding);
    info!(
        rows = table.len(),
        has_header = table.has_header(),
        columns = table.columns.len(),
        "loaded roster"
    );

    let options = IngestOptions::new(order, policy);
    let result = ingest_table(&table, &options);
    let report = IngestReport::from_batch(path, &table, &options, result)
        .with_context(|| format!("ingest {}", path.display()))?;

    if report.committed {
        info!(
            committed = report.records.len(),
            rejected = report.rejected.len(),
            "committed roster"
        );
    } else {
        warn!(
            rejected = report.rejected.len(),
            policy = policy.label(),
            "batch rejected"
        );
    }
    Ok(report)
}

fn log_decoding(requested: &str, decoding: &Decoding) {
    if !decoding.label_recognized {
        warn!(label = requested, "unknown encoding label, decoded as UTF-8");
    }
    if decoding.bom_override {
        debug!(
            requested,
            actual = decoding.encoding,
            "byte-order mark overrides requested encoding"
        );
    }
    if decoding.had_replacements {
        warn!(
            encoding = decoding.encoding,
            "replaced undecodable byte sequences"
        );
    }
}
