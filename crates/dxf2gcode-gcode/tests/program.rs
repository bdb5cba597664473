use std::f64::consts::FRAC_PI_2;

use dxf2gcode_core::Point;
use dxf2gcode_entities::{Arc, Circle, Ellipse, Entity, Line, PolyLine};
use dxf2gcode_gcode::{CompileError, ProgramCompiler};
use dxf2gcode_settings::{Config, MeasurementSystem};

fn drawing() -> Vec<Entity> {
    vec![
        Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0)).into(),
        Circle::new(Point::new(5.0, 5.0), 2.0).unwrap().into(),
        Arc::new(Point::new(0.0, 0.0), 1.0, 0.0, FRAC_PI_2)
            .unwrap()
            .into(),
        PolyLine::new(vec![
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            vec![Point::new(2.0, 2.0), Point::new(3.0, 2.0), Point::new(3.0, 3.0)],
        ])
        .unwrap()
        .into(),
    ]
}

fn ellipse() -> Entity {
    Ellipse::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 0.5, 0.0, 1.0)
        .unwrap()
        .into()
}

#[test]
fn test_full_program_body() {
    let mut config = Config::new();
    config.machine.xy_feedrate = 600.0;
    let compiler = ProgramCompiler::new(config).unwrap();

    let program = compiler.compile(&drawing()).unwrap();

    let expected = vec![
        "(Line from [0.00, 0.00] to [3.00, 4.00])",
        "G0 X0.00 Y0.00",
        "M3",
        "G1 X3.00 Y4.00 F600.00",
        "",
        "(Circle at [5.00,5.00], radius 2.00)",
        "M5",
        "G0 X3.00 Y5.00",
        "M3",
        "G3 I2.00 J0 F600.00",
        "M5",
        "",
        "(Arc at [0.00, 0.00], radius 1.00, from 0.00 to 1.57)",
        "G0 X1.00 Y0.00",
        "M3",
        "G3 X0.00 Y1.00 I-1.00 J0.00 F600.00",
        "M5",
        "",
        "(Polyline consisting of 2 segments.)",
        "G0 X0.00 Y0.00",
        "M3",
        "G1 X1.00 Y0.00 F600.00",
        "M5",
        "",
        "(Polyline consisting of 2 segments.)",
        "G0 X2.00 Y2.00",
        "M3",
        "G1 X3.00 Y2.00 F600.00",
        "G1 X3.00 Y3.00 F600.00",
        "M5",
        "",
    ];
    assert_eq!(program.body(), expected.as_slice());
    assert_eq!(program.emitted(), 4);
    assert_eq!(program.last_position(), Some(Point::new(3.0, 3.0)));
}

#[test]
fn test_ellipse_aborts_compilation() {
    let compiler = ProgramCompiler::new(Config::new()).unwrap();
    let mut entities = drawing();
    entities.insert(1, ellipse());

    let err = compiler.compile(&entities).unwrap_err();
    match err {
        CompileError::Entity { index, source, .. } => {
            assert_eq!(index, 1);
            assert!(source.is_not_implemented());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ellipse_skipped_when_configured() {
    let mut config = Config::new();
    config.output.skip_unsupported = true;
    let compiler = ProgramCompiler::new(config).unwrap();
    let mut entities = drawing();
    entities.push(ellipse());

    let program = compiler.compile(&entities).unwrap();
    assert_eq!(program.emitted(), 4);
    assert_eq!(program.skipped(), 1);
    assert!(!program.body().iter().any(|l| l.contains("Ellipse")));
}

#[test]
fn test_optimized_order_starts_nearest_home() {
    let mut config = Config::new();
    config.output.optimize_order = true;
    config.output.home = Some(Point::new(10.0, 10.0));
    let compiler = ProgramCompiler::new(config).unwrap();

    let entities: Vec<Entity> = vec![
        Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).into(),
        Line::new(Point::new(9.0, 9.0), Point::new(9.0, 8.0)).into(),
    ];
    let program = compiler.compile(&entities).unwrap();

    assert_eq!(program.body()[1], "G0 X9.00 Y9.00");
    assert!(program.postscript().contains(&"G0 X10.00 Y10.00".to_string()));
}

#[test]
fn test_imperial_preamble() {
    let mut config = Config::new();
    config.output.units = MeasurementSystem::Imperial;
    let program = ProgramCompiler::new(config).unwrap().compile(&[]).unwrap();

    assert!(program.preamble()[0].starts_with("(Generated by dxf2gcode"));
    assert_eq!(program.preamble()[1], "G20");
    assert_eq!(program.preamble()[2], "G90");
}

#[test]
fn test_every_engage_is_matched() {
    let program = ProgramCompiler::new(Config::new())
        .unwrap()
        .compile(&drawing())
        .unwrap();
    let on = program.body().iter().filter(|l| *l == "M3").count();
    let off = program.body().iter().filter(|l| *l == "M5").count();
    assert_eq!(on, 5);
    assert_eq!(on, off);
}

#[test]
fn test_line_cut_with_tool_engaged() {
    let program = ProgramCompiler::new(Config::new())
        .unwrap()
        .compile(&[Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0)).into()])
        .unwrap();

    let body = program.body();
    let engage = body.iter().position(|l| l == "M3").expect("no engage");
    let cut = body
        .iter()
        .position(|l| l.starts_with("G1 X3.00 Y4.00"))
        .expect("no cut");
    assert!(engage < cut);
    assert_eq!(program.postscript()[2], "M5");
}

#[test]
fn test_consecutive_lines_lift_between_cuts() {
    let entities: Vec<Entity> = vec![
        Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).into(),
        Line::new(Point::new(5.0, 5.0), Point::new(6.0, 5.0)).into(),
    ];
    let program = ProgramCompiler::new(Config::new())
        .unwrap()
        .compile(&entities)
        .unwrap();

    let body = program.body();
    let second_rapid = body
        .iter()
        .position(|l| l == "G0 X5.00 Y5.00")
        .expect("no rapid");
    assert_eq!(body[second_rapid - 1], "M5");
    assert_eq!(body[second_rapid + 1], "M3");
}
