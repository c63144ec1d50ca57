use pretty_assertions::assert_eq;
use tabstat::transform;
use tabstat::{ColumnType, Table, Value};

fn priced() -> Table {
    let rows: Vec<Vec<Value>> = vec![
        vec!["model".into(), "price".into(), "mileage".into()],
        vec!["SEL".into(), 21992.into(), 7413.into()],
        vec!["SE".into(), 14995.into(), 32655.into()],
        vec!["SES".into(), 11992.into(), 46047.into()],
        vec!["SE".into(), 8999.into(), Value::Null],
    ];
    let mut table = Table::new();
    table
        .load(
            &rows,
            &[ColumnType::Character, ColumnType::Numeric, ColumnType::Numeric],
        )
        .unwrap();
    table
}

fn numbers(column: &[Value]) -> Vec<f64> {
    column.iter().filter_map(Value::as_f64).collect()
}

#[test]
fn normalize_maps_extremes_to_unit_interval() {
    let table = priced();
    let out = table.normalize();

    let price = numbers(&out[1]);
    assert!(price.iter().all(|x| (0.0..=1.0).contains(x)));
    assert_eq!(price[0], 1.0);
    assert_eq!(price[3], 0.0);

    let mileage = numbers(&out[2]);
    assert_eq!(mileage[0], 0.0);
    assert_eq!(mileage[2], 1.0);
    assert_eq!(out[2][3], Value::Null);
}

#[test]
fn normalize_leaves_source_and_labels_untouched() {
    let table = priced();
    let before = table.columns().to_vec();
    let out = table.normalize();

    assert_eq!(out[0], before[0]);
    assert_eq!(table.columns(), before.as_slice());
}

#[test]
fn z_score_has_zero_mean_unit_std() {
    let out = priced().z_score();
    let price = numbers(&out[1]);

    let n = price.len() as f64;
    let mean = price.iter().sum::<f64>() / n;
    let var = price.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    assert!(mean.abs() < 1e-9);
    assert!((var.sqrt() - 1.0).abs() < 1e-9);
}

#[test]
fn free_functions_match_table_methods() {
    let table = priced();
    let types = table.data_types();
    assert_eq!(transform::normalize(&types, table.columns()), table.normalize());
    assert_eq!(transform::z_score(&types, table.columns()), table.z_score());
}

#[test]
fn split_partitions_rows() {
    let table = priced();
    let total = table.item_count();
    let split = table.split(1, None);

    assert_eq!(split.train_rows().len(), 2);
    assert_eq!(split.test_rows().len(), total - 2);

    for (j, column) in table.columns().iter().enumerate() {
        let mut joined = split.train[j].clone();
        joined.extend(split.test[j].iter().cloned());
        assert_eq!(&joined, column);
    }
}

#[test]
fn split_accepts_caller_data() {
    let table = priced();
    let data = vec![
        vec![Value::from(1), Value::from(2), Value::from(3)],
        vec![Value::from("a"), Value::from("b"), Value::from("c")],
    ];
    let split = table.split(0, Some(data.as_slice()));
    assert_eq!(split.train_rows(), vec![vec![Value::from(1), Value::from("a")]]);
    assert_eq!(split.test[1], vec![Value::from("b"), Value::from("c")]);
}

#[test]
fn split_past_end_is_empty() {
    let table = priced();
    let split = table.split(table.item_count(), None);
    assert!(split.train.is_empty());
    assert!(split.test.is_empty());
}
