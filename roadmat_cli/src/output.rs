//! Output formatting module

use std::fmt::Write;

use serde::Serialize;

use roadmat_core::conditions::{SoilType, TrafficLoad, Weather};
use roadmat_core::config::OutputFormat;
use roadmat_core::{CalcError, CalcResult, MaterialCatalog, RecommendationReport, ScoredRecommendation};

const RULE: &str = "═══════════════════════════════════════════════════════════════════════════════";

fn print_json<T: Serialize + ?Sized>(value: &T) -> CalcResult<()> {
    let content = serde_json::to_string_pretty(value).map_err(|e| CalcError::serialization(e.to_string()))?;
    println!("{}", content);
    Ok(())
}

pub fn print_report(report: &RecommendationReport, top: usize, format: OutputFormat) -> CalcResult<()> {
    if format == OutputFormat::Json {
        let mut shown = report.clone();
        shown.recommendations = report.top(top).to_vec();
        return print_json(&shown);
    }

    let params = &report.parameters;
    println!("{}", RULE);
    println!("  ROAD MATERIAL RECOMMENDATIONS");
    println!("{}", RULE);
    println!();
    println!("Project:");
    println!("  Location: {}", params.location);
    println!("  Traffic:  {}", params.traffic_load);
    println!("  Weather:  {}", params.weather);
    println!("  Soil:     {}", params.soil_type);

    for sub in &report.substitutions {
        println!("  [NOTE] {} '{}' not recognized, using '{}'", sub.field, sub.given, sub.substituted);
    }
    println!();

    let Some(best) = report.best_match() else {
        println!("No materials in catalog.");
        return Ok(());
    };

    print_best_match(best);

    println!("Ranking:");
    println!(
        "  {:>2}  {:<28} {:>7} {:>7} {:>7} {:>6} {:>7} {:>9} {:>8}",
        "#", "Material", "Score", "Load", "Cost", "Env", "Weather", "Interval", "Cost/yr"
    );
    for (rank, rec) in report.top(top).iter().enumerate() {
        let scores = &rec.detailed_scores;
        let forecast = &rec.maintenance_prediction;
        println!(
            "  {:>2}  {:<28} {:>7.2} {:>7.2} {:>7.2} {:>6.2} {:>7.2} {:>7.1}yr {:>8.2}",
            rank + 1,
            rec.material,
            rec.final_score,
            scores.load_capacity,
            scores.cost_efficiency,
            scores.environmental_impact,
            scores.weather_resistance,
            forecast.interval_years,
            forecast.annual_cost_factor,
        );
    }

    let shown = report.top(top).len();
    if shown < report.recommendations.len() {
        println!("  ... {} more", report.recommendations.len() - shown);
    }
    println!();
    println!("{}", RULE);

    Ok(())
}

fn print_best_match(best: &ScoredRecommendation) {
    print!("{}", format_best_match(best));
}

fn format_best_match(best: &ScoredRecommendation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Best Match: {}", best.material);
    let _ = writeln!(out, "  Score:             {:.2}", best.final_score);
    let _ = writeln!(
        out,
        "  Site fit:          {:.1}% {}",
        best.suitability.score,
        if best.suitability.is_full_match() { "[OK]" } else { "[PARTIAL]" }
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  Properties:");
    for (key, value) in best.properties.as_pairs() {
        let _ = writeln!(out, "    {:<20} {:>2}/10", key, value);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  Advantages:");
    for advantage in &best.advantages {
        let _ = writeln!(out, "    - {}", advantage);
    }
    let _ = writeln!(out);
    out
}

pub fn print_catalog(catalog: &MaterialCatalog, format: OutputFormat) -> CalcResult<()> {
    if format == OutputFormat::Json {
        return print_json(catalog);
    }

    println!(
        "{:<28} {:>4} {:>4} {:>4} {:>4} {:>4}  {}",
        "Material", "Dur", "Cost", "WxR", "Load", "Mnt", "Recycled"
    );
    for material in catalog {
        let p = &material.properties;
        println!(
            "{:<28} {:>4} {:>4} {:>4} {:>4} {:>4}  {}",
            material.name,
            p.durability,
            p.cost,
            p.weather_resistance,
            p.load_capacity,
            p.maintenance,
            if material.is_recycled { "yes" } else { "no" }
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct AcceptedOptions {
    traffic_load: Vec<&'static str>,
    weather: Vec<&'static str>,
    soil_type: Vec<&'static str>,
}

pub fn print_options(format: OutputFormat) -> CalcResult<()> {
    let options = AcceptedOptions {
        traffic_load: TrafficLoad::ALL.iter().map(|t| t.code()).collect(),
        weather: Weather::ALL.iter().map(|w| w.code()).collect(),
        soil_type: SoilType::ALL.iter().map(|s| s.code()).collect(),
    };

    if format == OutputFormat::Json {
        return print_json(&options);
    }

    println!("Traffic load: {}", options.traffic_load.join(", "));
    println!("Weather:      {}", options.weather.join(", "));
    println!("Soil type:    {}", options.soil_type.join(", "));
    Ok(())
}
