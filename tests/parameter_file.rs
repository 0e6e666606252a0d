use std::io::Write;

use abp_pairdist::domain::{CoefficientIndex, Family};
use abp_pairdist::io::{load_parameter_file, write_parameter_file};
use abp_pairdist::models::{fourier_shape, parameter_shapes};
use abp_pairdist::reconstruct::bundled_parameter_path;
use abp_pairdist::{AngleGrid, Error, Reconstructor, StatePoint};
use tempfile::{NamedTempFile, tempdir};

#[test]
fn bundled_table_has_expected_shape() {
    let loaded = load_parameter_file(&bundled_parameter_path()).unwrap();
    assert!(loaded.warnings.is_empty());

    for family in [Family::F11, Family::F22] {
        let table = loaded.tables.family(family);
        for index in family.indices() {
            let rows = table.rows(index).unwrap();
            assert_eq!(rows.len(), fourier_shape(index).arity(), "f^{family}_{index}");
            for (row, shape) in rows.iter().zip(parameter_shapes(index)) {
                assert_eq!(row.len(), shape.arity(), "f^{family}_{index} {}", shape.name());
            }
        }
    }
    assert_eq!(loaded.tables.f11.len(), 9);
    assert_eq!(loaded.tables.f22.len(), 4);
}

#[test]
fn written_table_reloads_identically() {
    let written = load_parameter_file(&bundled_parameter_path()).unwrap().tables;

    let dir = tempdir().unwrap();
    let path = dir.path().join("roundtrip.csv");
    write_parameter_file(&path, &written).unwrap();
    let reloaded = load_parameter_file(&path).unwrap();

    assert!(reloaded.warnings.is_empty());
    assert_eq!(reloaded.tables, written);

    let angles = AngleGrid::meshgrid(&[0.0, 1.0], &[0.0, 2.0]);
    let state = StatePoint::new(0.25, 40.0);
    let a = Reconstructor::from_tables(&written).unwrap().field(&[0.9, 1.0], &angles, state).unwrap();
    let b = Reconstructor::from_tables(&reloaded.tables).unwrap().field(&[0.9, 1.0], &angles, state).unwrap();
    assert_eq!(a, b);
}

#[test]
fn malformed_labels_do_not_populate_tables() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ",,q1,q2").unwrap();
    writeln!(file, "f^11_1,a,1.0,2.0").unwrap();
    writeln!(file, "f^11_100,a,1.0,2.0").unwrap();
    writeln!(file, "f^22_12,a,3.0").unwrap();
    file.flush().unwrap();

    let loaded = load_parameter_file(file.path()).unwrap();
    assert_eq!(loaded.warnings.len(), 2);
    assert_eq!(loaded.warnings[0].line, 2);
    assert_eq!(loaded.warnings[1].label, "f^11_100");
    assert!(loaded.tables.f11.is_empty());
    assert_eq!(loaded.tables.f22.len(), 1);
}

#[test]
fn truncated_table_fails_before_evaluation() {
    let mut tables = load_parameter_file(&bundled_parameter_path()).unwrap().tables;

    // Drop the last slot row of f^11_21.
    let index = CoefficientIndex::new(2, 1).unwrap();
    let rows = tables.f11.rows(index).unwrap().to_vec();
    let mut f11 = abp_pairdist::ParameterTable::new();
    for other in tables.f11.indices().collect::<Vec<_>>() {
        let keep = tables.f11.rows(other).unwrap().to_vec();
        let keep = if other == index { rows[..rows.len() - 1].to_vec() } else { keep };
        for row in keep {
            f11.push_row(other, row);
        }
    }
    tables.f11 = f11;

    match Reconstructor::from_tables(&tables).unwrap_err() {
        Error::SlotCount { family, index: got, expected, given, .. } => {
            assert_eq!(family, Family::F11);
            assert_eq!(got, index);
            assert_eq!(expected, 6);
            assert_eq!(given, 5);
        }
        other => panic!("unexpected error: {other}"),
    }
}
