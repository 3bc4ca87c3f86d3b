use std::f64::consts::{FRAC_PI_2, PI};

use pv_plant::{
    incidence_angle, run_sweep, LightSource, ModuleMount, PhotovoltaicModule, Plant,
    SweepConfig,
};

fn main() {
    let mut test_mount = ModuleMount::new(-FRAC_PI_2, PhotovoltaicModule::new(10, 10));
    test_mount.set_element_counts(2, 3);

    println!("=== Single Mount ===");
    println!("Orientation: {:.4} rad", test_mount.orientation());
    println!("Module area: {:.0} cm^2", test_mount.module().area());
    println!("Power at pi/2 incidence: {:.2} W", test_mount.current_power(FRAC_PI_2));
    match test_mount.efficiency(0.0) {
        Ok(eff) => println!("Efficiency at normal incidence: {:.1}%", eff),
        Err(e) => println!("Efficiency unavailable: {}", e),
    }
    println!();

    println!("=== Uniform Plant ===");
    let plant = Plant::uniform(test_mount);
    let mut sun = LightSource::at(-FRAC_PI_2);
    while sun.angle() < FRAC_PI_2 {
        let incidence = incidence_angle(test_mount.orientation(), sun.angle());
        let single = test_mount.current_power(incidence);
        println!("{:.2}; {:.2}", single, plant.current_output(&sun));
        sun.move_by(PI / 16.0);
    }
    println!();

    println!("=== Flattened Plant ===");
    let mut plant = Plant::flattened_layout();
    for index in 0..4 {
        if let Err(e) = plant.resize_module(index, 10, 10) {
            eprintln!("{}", e);
        }
    }
    for line in plant.report() {
        println!("  {}", line);
    }
    match run_sweep(&plant, &test_mount, &SweepConfig::default()) {
        Ok(report) => {
            for s in &report.samples {
                println!(
                    "Sun position: {:.4}; Current output: {:.2}",
                    s.source_angle, s.plant_output
                );
            }
            println!("Std dev of output: {:.2} W", report.stats.std_dev);
        }
        Err(e) => eprintln!("{}", e),
    }
}
