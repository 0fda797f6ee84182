//! Whole-pipeline rendering: chained commands, stdin placeholders, and
//! embedded sub-invocations.

use radcmd::{
    Dctimestep, Gendaylit, Oconv, Operator, Pinterp, RadianceCommand, Rcontrib, Rfluxmtx, Rmtxop,
    Rtrace,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

#[test]
fn oconv_pipes_into_rtrace() {
    init_tracing();
    let mut rtrace = Rtrace::new("scene.oct");
    rtrace.options.ab.set(3).unwrap();
    rtrace.options.I.set(true).unwrap();
    rtrace.chain_mut().set_output("results.res");

    let mut oconv = Oconv::new(["room.mat", "room.rad", "sky.rad"]);
    oconv.pipe_into(Box::new(rtrace)).unwrap();

    assert_eq!(
        oconv.to_radiance().unwrap(),
        "oconv room.mat room.rad sky.rad | rtrace -ab 3 -I scene.oct > results.res"
    );
}

#[test]
fn upstream_output_is_dropped_when_piping() {
    init_tracing();
    let mut second = Oconv::new(["extra.rad"]);
    second.chain_mut().set_output("b.res");

    let mut first = Oconv::new(["scene.rad"]);
    first.chain_mut().set_output("a.res");
    // advisory only; the piped form must still render
    first.pipe_into(Box::new(second)).unwrap();

    assert_eq!(
        first.to_radiance().unwrap(),
        "oconv scene.rad | oconv - > b.res"
    );
}

#[test]
fn gendaylit_pipes_into_dctimestep() {
    let mut dctimestep = Dctimestep::default();
    dctimestep.set_day_coef_matrix("dc.mtx");
    dctimestep.chain_mut().set_output("illum.mtx");

    let mut gendaylit = Gendaylit::new(6, 21, 12.0);
    gendaylit.pipe_into(Box::new(dctimestep)).unwrap();

    assert_eq!(
        gendaylit.to_radiance().unwrap(),
        "gendaylit 6 21 12:00 | dctimestep dc.mtx > illum.mtx"
    );
}

#[test]
fn rtrace_pipes_into_pinterp() {
    let mut pinterp = Pinterp::default();
    pinterp.push_image("scene.hdr", "scene.zbf");

    let mut rtrace = Rtrace::new("scene.oct");
    rtrace.set_sensors("rays.txt");
    rtrace.pipe_into(Box::new(pinterp)).unwrap();

    assert_eq!(
        rtrace.to_radiance().unwrap(),
        "rtrace scene.oct < rays.txt | pinterp -vf - scene.hdr scene.zbf"
    );
}

#[test]
fn three_stage_chain_renders_left_to_right() {
    let mut rmtxop = Rmtxop::for_one_matrix_calc(Some("-"));
    rmtxop.mtx1_mut().set_transform([47.4, 119.9, 11.6]);
    rmtxop.chain_mut().set_output("illuminance.dat");

    let mut rcontrib = Rcontrib::new("scene.oct");
    rcontrib.options.m.push("sky_glow").unwrap();
    rcontrib.pipe_into(Box::new(rmtxop)).unwrap();

    let mut oconv = Oconv::new(["room.rad", "sky.rad"]);
    oconv.pipe_into(Box::new(rcontrib)).unwrap();

    assert_eq!(
        oconv.to_radiance().unwrap(),
        "oconv room.rad sky.rad | rcontrib -m sky_glow scene.oct | \
         rmtxop -c 47.4 119.9 11.6 - > illuminance.dat"
    );
}

#[test]
fn enclosed_command_embeds_in_rfluxmtx() {
    let oconv = Oconv::new(["scene.rad"]);
    let enclosed = oconv.enclose(false).unwrap();

    let mut rfluxmtx = Rfluxmtx::new("receivers.rad");
    rfluxmtx.set_sender("window.rad");
    rfluxmtx.set_octree(&enclosed);

    let rendered = rfluxmtx.to_radiance().unwrap();
    if cfg!(windows) {
        assert_eq!(
            rendered,
            "rfluxmtx window.rad receivers.rad -i \"\"\"\"!oconv scene.rad\"\"\"\""
        );
    } else {
        assert_eq!(
            rendered,
            "rfluxmtx window.rad receivers.rad -i \"\"\"'!oconv scene.rad'\"\"\""
        );
    }
}

#[test]
fn embedded_rmtxop_as_matrix_operand() {
    let three_phase = Rmtxop::for_three_matrix_calc(
        Some("view.vmx"),
        Some("t.xml"),
        Some("d.dmx"),
        None,
        None,
    );
    let enclosed = three_phase.enclose(false).unwrap();

    let mut outer = Rmtxop::for_one_matrix_calc(Some(enclosed.as_str()));
    outer.mtx1_mut().set_transform([47.4, 119.9, 11.6]);
    outer.chain_mut().set_output("output.dat");

    if cfg!(windows) {
        assert_eq!(
            outer.to_radiance().unwrap(),
            "rmtxop -c 47.4 119.9 11.6 \"!rmtxop view.vmx t.xml d.dmx\" > output.dat"
        );
    } else {
        assert_eq!(
            outer.to_radiance().unwrap(),
            "rmtxop -c 47.4 119.9 11.6 '!rmtxop view.vmx t.xml d.dmx' > output.dat"
        );
    }
}

#[test]
fn two_matrix_chain_with_operator() {
    let rmtxop = Rmtxop::for_two_matrix_calc(Some("a.mtx"), Some("b.mtx"), Some(Operator::Add));
    assert_eq!(rmtxop.to_radiance().unwrap(), "rmtxop a.mtx + b.mtx");
}

#[test]
fn rendering_twice_is_identical() {
    let mut rfluxmtx = Rfluxmtx::new("receivers.rad");
    rfluxmtx.set_sensors("grid.pts");
    rfluxmtx.options.ab.set(5).unwrap();
    let first = rfluxmtx.to_radiance().unwrap();
    let second = rfluxmtx.to_radiance().unwrap();
    assert_eq!(first, second);
}

#[test]
fn backslashes_normalize_in_the_full_line() {
    let mut rtrace = Rtrace::new(r"model\scene.oct");
    rtrace.set_sensors(r"grids\sensors.pts");
    rtrace.chain_mut().set_output(r"results\day.res");
    assert_eq!(
        rtrace.to_radiance().unwrap(),
        "rtrace model/scene.oct < grids/sensors.pts > results/day.res"
    );
}
