use anyhow::Result;

use cardstack_core::StackPreset;

pub fn run() -> Result<()> {
    println!("Presets ({}):\n", StackPreset::ALL.len());

    for preset in StackPreset::ALL {
        let options = preset.options();
        let blur = if options.blur_effect_enabled {
            format!(", blur {:.1}", options.max_blur_effect_radius)
        } else {
            String::new()
        };
        println!(
            "  {:<12} scale {:.2}/step, spacing {:.2}, rotate {:.1}°, pop {:.1}°{}",
            preset.name(),
            options.scale_factor,
            options.spacing_factor,
            options.stack_rotate_angle.to_degrees(),
            options.pop_angle.to_degrees(),
            blur
        );
    }

    println!("\nUse one with:");
    println!("  cardstack sample --preset <name>");
    Ok(())
}
