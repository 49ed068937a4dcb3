use etch::{
    interpreter::{Command, ScriptContext, evaluate_commands, parser::parse_script},
    matrix::Transform,
};

fn parse(script: &str) -> Vec<Command> {
    parse_script(script.lines().map(str::to_string)).unwrap()
}

fn run(script: &str) -> ScriptContext {
    let mut context = ScriptContext::new();
    evaluate_commands(parse(script), &mut context).unwrap();
    context
}

fn pixel(context: &ScriptContext, x: usize, y: usize) -> (u8, u8, u8) {
    let picture = &context.picture;
    let index = ((picture.yres - 1 - y) * picture.xres + x) * 3;
    (picture.data[index], picture.data[index + 1], picture.data[index + 2])
}

#[test]
fn the_whole_vocabulary_parses() {
    let commands = parse(concat!(
        "push\n",
        "move\n250 250 0\n",
        "rotate\ny 30\n",
        "scale\n1 2 1\n",
        "box\n-100 100 -100 200 200 200\n",
        "sphere\n0 0 0 80\n",
        "torus\n0 0 0 20 100\n",
        "line\n0 0 0 100 100 0\n",
        "circle\n0 0 0 50\n",
        "hermite\n0 0 100 100 1 0 0 1\n",
        "bezier\n0 0 30 90 60 90 100 0\n",
        "pop\n",
        "clear\n",
        "save\nout.png\n",
        "quit\n",
    ));

    assert_eq!(commands.len(), 15);
    assert_eq!(commands[0], Command::Push);
    assert_eq!(commands.last(), Some(&Command::Quit));
}

#[test]
fn scaled_line_lands_in_world_space_and_pop_restores_the_stack() {
    // push / scale 2 / line to (1, 0, 0) / pop: the drawn segment must reach
    // world x = 2 and the stack must come back to the identity base frame.
    let context = run(concat!(
        "push\n",
        "scale\n2 2 2\n",
        "line\n0 0 0 1 0 0\n",
        "pop\n",
    ));

    assert_eq!(pixel(&context, 0, 0), (0, 255, 255));
    assert_eq!(pixel(&context, 2, 0), (0, 255, 255));
    assert_eq!(pixel(&context, 3, 0), (0, 0, 0));

    assert_eq!(context.coordinate_stack.depth(), 1);
    assert_eq!(context.coordinate_stack.peek(), Transform::identity());
}

#[test]
fn unrecognized_commands_do_not_stop_the_run() {
    let context = run(concat!(
        "foobar\n",
        "line\n0 0 0 10 0 0\n",
    ));

    assert_eq!(pixel(&context, 5, 0), (0, 255, 255));
}

#[test]
fn clear_wipes_previously_drawn_geometry() {
    let context = run(concat!(
        "line\n0 0 0 10 0 0\n",
        "clear\n",
    ));

    assert_eq!(pixel(&context, 5, 0), (0, 0, 0));
}

#[test]
fn quit_discards_the_rest_of_the_script() {
    let context = run(concat!(
        "quit\n",
        "line\n0 0 0 10 0 0\n",
    ));

    assert_eq!(pixel(&context, 5, 0), (0, 0, 0));
}

#[test]
fn transforms_only_touch_the_stack_not_the_picture() {
    let context = run(concat!(
        "move\n10 10 0\n",
        "rotate\nz 90\n",
        "scale\n3 3 3\n",
    ));

    assert!(context.picture.data.iter().all(|&byte| byte == 0));
    assert_ne!(context.coordinate_stack.peek(), Transform::identity());
}

#[test]
fn save_writes_an_image_file() {
    let path = std::env::temp_dir().join("etch_integration_save.png");
    let script = format!("box\n100 300 0 150 150 150\nsave\n{}\n", path.display());

    run(&script);

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn solids_are_shaded_within_the_color_range() {
    let context = run("sphere\n250 250 0 100\n");

    // something was drawn, and every channel stayed a valid u8 by clamping
    let drawn = context.picture.data.chunks_exact(3).any(|p| p != [0, 0, 0]);
    assert!(drawn);
}
