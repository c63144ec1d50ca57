use proptest::prelude::*;
use tabstat::analysis::Grouping;
use tabstat::{ColumnType, Table, Value};

const COLORS: [&str; 6] = ["Black", "Silver", "Red", "Blue", "Gold", "Pink"];

/// (year, color index, price) observations
fn observations() -> impl Strategy<Value = Vec<(i32, usize, f64)>> {
    prop::collection::vec(
        (2005i32..2012, 0usize..COLORS.len(), -1.0e6f64..1.0e6),
        1..60,
    )
}

fn load(observations: &[(i32, usize, f64)]) -> Table {
    let mut rows: Vec<Vec<Value>> = vec![vec!["year".into(), "color".into(), "price".into()]];
    rows.extend(
        observations
            .iter()
            .map(|&(year, color, price)| -> Vec<Value> {
                vec![year.into(), COLORS[color].into(), price.into()]
            }),
    );

    let mut table = Table::new();
    table
        .load(
            &rows,
            &[ColumnType::Numeric, ColumnType::Character, ColumnType::Numeric],
        )
        .expect("generated rows are rectangular");
    table
}

proptest! {
    #[test]
    fn item_count_matches_rows(obs in observations()) {
        let table = load(&obs);
        prop_assert_eq!(table.item_count(), obs.len());
        for name in table.categories() {
            prop_assert_eq!(table.get_column(&name).len(), obs.len());
        }
    }

    #[test]
    fn one_way_counts_cover_column(obs in observations()) {
        let table = load(&obs);
        let counts = table.one_way("color", false);
        let sum: f64 = counts.frequencies.values().map(|f| f.as_f64()).sum();
        prop_assert_eq!(sum, obs.len() as f64);

        let percents = table.one_way("color", true);
        let sum: f64 = percents.frequencies.values().map(|f| f.as_f64()).sum();
        // each entry rounds by at most half a hundredth
        prop_assert!((sum - 100.0).abs() <= 0.005 * COLORS.len() as f64 + 1e-9);
    }

    #[test]
    fn cross_table_marginals_agree(obs in observations(), grouped in any::<bool>()) {
        let table = load(&obs);
        let grouping = Grouping::new(["Black Silver", "Red Blue Gold"]);
        let result = table.cross_table("year", "color", grouped.then_some(&grouping));

        for row in result.rows.values() {
            let n: f64 = row.cells.iter().map(|cell| cell.n).sum();
            prop_assert_eq!(n, row.total);
        }
        let row_sum: f64 = result.rows.values().map(|row| row.total).sum();
        let column_sum: f64 = result.column_totals.iter().sum();
        prop_assert_eq!(row_sum, result.grand_total);
        prop_assert_eq!(column_sum, result.grand_total);

        prop_assert!(result.chi2 >= 0.0);
        prop_assert!(result.chi2.is_finite());
        prop_assert_eq!(
            result.degrees_of_freedom,
            result.rows.len().saturating_sub(1) * result.column_names.len().saturating_sub(1)
        );

        let matched = obs.len() - result.unmatched;
        prop_assert_eq!(result.grand_total, matched as f64);
    }

    #[test]
    fn normalize_stays_in_unit_interval(obs in observations()) {
        let table = load(&obs);
        let price: Vec<f64> = table.normalize()[2].iter().filter_map(Value::as_f64).collect();
        prop_assert!(price.iter().all(|x| (0.0..=1.0).contains(x)));

        let source: Vec<f64> = obs.iter().map(|o| o.2).collect();
        let min = source.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = source.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let at_min = source.iter().position(|&x| x == min).unwrap_or(0);
        let at_max = source.iter().position(|&x| x == max).unwrap_or(0);
        prop_assert_eq!(price[at_min], 0.0);
        if max > min {
            prop_assert_eq!(price[at_max], 1.0);
        }
    }

    #[test]
    fn z_score_standardizes(obs in observations()) {
        let table = load(&obs);
        let z: Vec<f64> = table.z_score()[2].iter().filter_map(Value::as_f64).collect();

        if table.std("price") > 1e-6 {
            let n = z.len() as f64;
            let mean = z.iter().sum::<f64>() / n;
            let std = (z.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();
            prop_assert!(mean.abs() < 1e-6);
            prop_assert!((std - 1.0).abs() < 1e-6);
        } else {
            prop_assert!(z.iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn split_reconstructs_columns(obs in observations(), cut in 0usize..80) {
        let table = load(&obs);
        let split = table.split(cut, None);
        let total = table.item_count();

        if cut >= total {
            prop_assert!(split.is_empty());
        } else {
            prop_assert_eq!(split.train_rows().len(), cut + 1);
            prop_assert_eq!(split.test[0].len(), total - cut - 1);
            for (j, column) in table.columns().iter().enumerate() {
                let mut joined = split.train[j].clone();
                joined.extend(split.test[j].iter().cloned());
                prop_assert_eq!(&joined, column);
            }
        }
    }
}
