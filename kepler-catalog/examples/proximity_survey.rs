use std::collections::HashMap;

use kepler_catalog::catalog::{
    Catalog, COL_DEC, COL_KEPLER_ID, COL_KEP_MAG, COL_RA, COL_REDDENING,
};
use kepler_catalog::query::{proximity_survey, survey_by_class, ProximityParams};
use kepler_catalog::types::{StarClass, TypeCatalog};

fn row(id: u64, ra: &str, dec: &str, mag: &str, reddening: &str) -> HashMap<String, String> {
    HashMap::from([
        (COL_KEPLER_ID.to_string(), id.to_string()),
        (COL_RA.to_string(), ra.to_string()),
        (COL_DEC.to_string(), dec.to_string()),
        (COL_KEP_MAG.to_string(), mag.to_string()),
        (COL_REDDENING.to_string(), reddening.to_string()),
    ])
}

fn main() -> anyhow::Result<()> {
    // A small field: a clustered group around RA 19h47m and two
    // outliers, with magnitudes/reddenings spanning the class cuts.
    let rows = vec![
        row(757076, "19 47 12.3", "+46 24 24.0", "13.5", "0.05"),
        row(757099, "19 47 15.1", "+46 24 27.5", "13.8", "0.04"),
        row(757137, "19 47 19.8", "+46 24 20.2", "10.2", "0.03"),
        row(757280, "19 47 55.0", "+46 24 26.0", "13.1", "0.06"),
        row(892010, "5 20 10.0", "+40 10 10.0", "16.2", "0.02"),
        row(892195, "19 48 2.0", "+46 25 1.0", "11.1", "0.08"),
    ];

    let catalog = Catalog::from_rows(&rows)?;
    let types = TypeCatalog::from_catalog(&catalog);

    println!("Catalog: {} stars, {} classified", catalog.len(), types.len());
    for class in StarClass::ALL {
        println!("  {:<17} {}", class.to_string(), types.population(class));
    }

    let params = ProximityParams { tolerance_sec: 30.0 };
    let scores = proximity_survey(&catalog, &types, &params);

    println!(
        "\nSame-type fraction per star (tolerance {} s, {} scored):",
        params.tolerance_sec,
        scores.len()
    );
    for (id, fraction) in &scores {
        let star = catalog.get(*id).expect("scored star is in the catalog");
        let class = types.class_of(*id).expect("scored star is classified");
        println!(
            "  KIC {:>8}  {}  {:<17} {:.3}",
            id,
            star.position.expect("scored star has a position"),
            class.to_string(),
            fraction,
        );
    }

    println!("\nMean fraction per class:");
    for (class, mean) in survey_by_class(&scores, &types) {
        println!("  {:<17} {:.3}", class.to_string(), mean);
    }

    Ok(())
}
