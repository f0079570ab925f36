use std::path::Path;

use console::Style;
use stageview_core::config::ViewerConfig;
use stageview_core::geometry::Dimensions;
use stageview_core::view::ViewState;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_view_summary(path: &Path, config: &ViewerConfig, image: Dimensions, view: &ViewState) {
    let s = Styles::new();
    let footprint = view.scaled_image(image);
    let stage = config.stage.dimensions();

    println!();
    println!("  {}", s.title.apply_to("Stageview"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!("{}x{}", image.width, image.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Stage"),
        s.value.apply_to(format!("{}x{}", stage.width, stage.height))
    );
    println!();

    println!("  {}", s.header.apply_to("Default View"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4} ({:.1}%)", view.scale, view.scale * 100.0))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(format!("({:.1}, {:.1})", view.offset.x, view.offset.y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Footprint"),
        s.value.apply_to(format!("{:.1}x{:.1}", footprint.width, footprint.height))
    );
    println!();

    println!("  {}", s.header.apply_to("Zoom"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Step"),
        s.value.apply_to(format!("x{}", config.zoom.step_factor))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!(
            "{:.4} .. {:.4}",
            view.scale * config.zoom.min_relative,
            view.scale * config.zoom.max_relative
        ))
    );
    println!();
}
