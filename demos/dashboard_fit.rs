use linfa_regression::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // set RUST_LOG=linfa_regression=debug to follow the solver choice
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sqft = vec![1400., 1600., 1700., 1875., 1100., 1550., 2350., 2450., 1425., 1700.];
    let rooms = vec![3., 3., 4., 4., 2., 3., 5., 4., 3., 3.];
    let price = vec![245., 312., 279., 308., 199., 219., 405., 324., 319., 255.];

    let dataset = Dataset::from_columns(&[sqft, rooms], &price)?
        .with_feature_names(vec!["sqft", "rooms"])?
        .with_target_name("price");
    let model = LinearRegression::new().fit(&dataset)?;

    println!("{:<8}{}", "Var_Name", linfa_regression::SUMMARY_KEYS.join("\t"));
    for row in model.summary() {
        let values: Vec<String> = row
            .fields()
            .iter()
            .map(|(_, value)| format!("{:.4}", value))
            .collect();
        println!("{:<8}{}", row.name, values.join("\t"));
    }

    println!();
    for (name, coefficient) in model.coefficient_table() {
        println!("{:<8}{:.4}", name, coefficient);
    }

    println!();
    for (i, (ycap, error)) in model.ycap().iter().zip(model.residuals().iter()).enumerate() {
        println!("{:>3} predicted {:>9.3} error {:>8.3}", i, ycap, error);
    }

    println!();
    println!("{}", model.anova());

    Ok(())
}
