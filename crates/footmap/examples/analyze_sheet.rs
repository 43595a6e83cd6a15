//! Analyze one pressure sheet and print its statistics.
//!
//! Usage: analyze_sheet <image_path> [output.png]

use footmap::analysis::analyze_path;
use footmap::HeatmapParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    footmap::core::init_tracing(false, false);
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: analyze_sheet <image_path> [output.png]");
        return Ok(());
    };
    let output = args
        .next()
        .unwrap_or_else(|| "foot-pressure-map.png".to_string());

    let foot = analyze_path(&path, &HeatmapParams::default())?;
    foot.save_heatmap(&output)?;

    println!(
        "average {:.2}, max {:.2}, area {}",
        foot.stats.average_pressure, foot.stats.max_pressure, foot.stats.total_area
    );
    if let Some(bbox) = foot.bbox {
        println!(
            "pressure box: x {}..={}, y {}..={}",
            bbox.left, bbox.right, bbox.top, bbox.bottom
        );
    }
    println!("wrote {output}");
    Ok(())
}
