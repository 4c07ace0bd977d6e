//! Full-pipeline integration test: Parquet fixture on disk through the
//! cached loader and the experiment processor.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use tempfile::TempDir;

use diaqc::prelude::*;

struct Row {
    run: &'static str,
    protein_group: &'static str,
    pg_maxlfq: f64,
    precursor_id: &'static str,
    precursor_normalised: f64,
    precursor_quantity: f64,
    sequence: &'static str,
}

const ROWS: &[Row] = &[
    Row {
        run: "X_A1",
        protein_group: "P1",
        pg_maxlfq: 100.0,
        precursor_id: "PEPTIDEK2",
        precursor_normalised: 10.0,
        precursor_quantity: 1000.0,
        sequence: "PEPTIDEK",
    },
    Row {
        run: "X_A1",
        protein_group: "P2",
        pg_maxlfq: 50.0,
        precursor_id: "SEKQENCER2",
        precursor_normalised: 5.0,
        precursor_quantity: 500.0,
        sequence: "SEKQENCER",
    },
    Row {
        run: "X_A2",
        protein_group: "P1",
        pg_maxlfq: 101.0,
        precursor_id: "PEPTIDEK2",
        precursor_normalised: 10.1,
        precursor_quantity: 1010.0,
        sequence: "PEPTIDEK",
    },
    Row {
        run: "X_A3",
        protein_group: "P1",
        pg_maxlfq: 99.0,
        precursor_id: "PEPTIDEK2",
        precursor_normalised: 9.9,
        precursor_quantity: 990.0,
        sequence: "PEPTIDEK",
    },
    Row {
        run: "Y_B1",
        protein_group: "P9",
        pg_maxlfq: 7.0,
        precursor_id: "OTHERK2",
        precursor_normalised: 0.7,
        precursor_quantity: 70.0,
        sequence: "OTHERK",
    },
];

fn write_fixture(path: &Path) {
    let strings = |f: fn(&Row) -> &'static str| -> ArrayRef {
        Arc::new(StringArray::from(
            ROWS.iter().map(f).collect::<Vec<_>>(),
        ))
    };
    let floats = |f: fn(&Row) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from(
            ROWS.iter().map(f).collect::<Vec<_>>(),
        ))
    };

    let arrays: Vec<(&str, ArrayRef)> = vec![
        (columns::RUN, strings(|r| r.run)),
        (columns::PROTEIN_GROUP, strings(|r| r.protein_group)),
        (columns::PG_MAXLFQ, floats(|r| r.pg_maxlfq)),
        (columns::PRECURSOR_ID, strings(|r| r.precursor_id)),
        (columns::PRECURSOR_NORMALISED, floats(|r| r.precursor_normalised)),
        (columns::PRECURSOR_QUANTITY, floats(|r| r.precursor_quantity)),
        (columns::STRIPPED_SEQUENCE, strings(|r| r.sequence)),
        (columns::MODIFIED_SEQUENCE, strings(|r| r.sequence)),
        (columns::GENES, strings(|_| "G1")),
    ];

    let fields: Vec<Field> = arrays
        .iter()
        .map(|(name, array)| Field::new(*name, array.data_type().clone(), true))
        .collect();
    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(
        schema.clone(),
        arrays.into_iter().map(|(_, a)| a).collect(),
    )
    .unwrap();

    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

#[test]
fn summarizes_tagged_runs_from_parquet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.parquet");
    write_fixture(&path);

    let mut cache = TableCache::new();
    let table = cache.load(&path).unwrap();
    assert_eq!(table.len(), 5);

    let experiment = ExperimentDescriptor {
        tags: expand_tag_range(&["A"], 1, 3, ""),
        instrument: "timsTOF".to_string(),
        method: "dia-20min".to_string(),
    };
    let summary = process_experiment(&table, &experiment, &QcParams::default());

    // Y_B1 is excluded by the tag filter.
    assert_eq!(summary.runs.len(), 3);
    assert_eq!(summary.runs[0].run, "X_A1");
    assert_eq!(summary.runs[0].peptides, 2);
    assert_eq!(summary.runs[0].total_intensity, 1500.0);
    assert_eq!(summary.runs[1].peptides, 1);

    // PEPTIDEK appears in three runs with ~1% CV; P2's single observation
    // is gated out by min_values_for_cv.
    assert_eq!(summary.protein_groups_passing_cv, 1);
    assert_eq!(summary.precursors_passing_cv, 1);
    assert_eq!(summary.total_peptides, 2);
    assert_eq!(summary.total_protein_groups, 2);
    assert_eq!(summary.total_precursors, 2);

    // Re-running against the cached table gives identical output.
    let again = process_experiment(&cache.load(&path).unwrap(), &experiment, &QcParams::default());
    assert_eq!(again, summary);
}
