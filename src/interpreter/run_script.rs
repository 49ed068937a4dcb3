use std::error::Error;

use log::debug;

use crate::{
    constants::{
        DEFAULT_BACKGROUND_COLOR, DEFAULT_FOREGROUND_COLOR, DEFAULT_LIGHTING_CONFIG,
        DEFAULT_PICTURE_DIMENSIONS, DEFAULT_REFLECTION_CONSTANTS,
    },
    matrix::{Matrix, Transform},
    picture::Picture,
    render::{
        LightingConfig, ReflectionConstants,
        edge_list::{add_bezier_curve, add_circle, add_edge, add_hermite_curve, render_edges},
        polygon_list::{add_box, add_sphere, add_torus, render_polygons},
    },
};
use super::{coordinate_stack::CoordinateStack, parser::Command};

/// Everything a running script touches: the drawing surface, the in-flight
/// geometry matrices, the coordinate-system stack, and the light/material
/// configuration. One context per run, torn down when evaluation returns.
pub struct ScriptContext {
    pub picture: Picture,
    pub edges: Matrix,
    pub polygons: Matrix,
    pub coordinate_stack: CoordinateStack,
    pub lighting_config: LightingConfig,
    pub reflection_constants: ReflectionConstants,
}

impl ScriptContext {
    pub fn new() -> Self {
        Self {
            picture: Picture::new(DEFAULT_PICTURE_DIMENSIONS.0, DEFAULT_PICTURE_DIMENSIONS.1, &DEFAULT_BACKGROUND_COLOR),
            edges: Matrix::new(),
            polygons: Matrix::new(),
            coordinate_stack: CoordinateStack::new(),
            lighting_config: DEFAULT_LIGHTING_CONFIG,
            reflection_constants: DEFAULT_REFLECTION_CONSTANTS,
        }
    }

    /// Transforms the pending edge matrix into world space, draws it, and
    /// resets it for the next command.
    fn render_edges(&mut self) {
        self.coordinate_stack.peek().apply(&mut self.edges);
        render_edges(&self.edges, &mut self.picture, &DEFAULT_FOREGROUND_COLOR);
        self.edges.clear();
    }

    fn render_polygons(&mut self) {
        self.coordinate_stack.peek().apply(&mut self.polygons);
        render_polygons(&self.polygons, &mut self.picture, &self.lighting_config, &self.reflection_constants);
        self.polygons.clear();
    }
}

impl Default for ScriptContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn evaluate_commands(commands: Vec<Command>, context: &mut ScriptContext) -> Result<(), Box<dyn Error>> {
    for command in commands {
        if command == Command::Quit {
            break;
        }
        execute_command(command, context)?;
    }

    Ok(())
}

fn execute_command(command: Command, context: &mut ScriptContext) -> Result<(), Box<dyn Error>> {
    debug!("executing {:?}", command);

    match command {
        Command::Line { x0, y0, z0, x1, y1, z1 } => {
            add_edge(&mut context.edges, x0, y0, z0, x1, y1, z1);
            context.render_edges();
        }

        Command::Circle { cx, cy, cz, r } => {
            add_circle(&mut context.edges, cx, cy, cz, r);
            context.render_edges();
        }

        Command::Hermite { x0, y0, x1, y1, rx0, ry0, rx1, ry1 } => {
            add_hermite_curve(&mut context.edges, x0, y0, x1, y1, rx0, ry0, rx1, ry1);
            context.render_edges();
        }

        Command::Bezier { x0, y0, x1, y1, x2, y2, x3, y3 } => {
            add_bezier_curve(&mut context.edges, x0, y0, x1, y1, x2, y2, x3, y3);
            context.render_edges();
        }

        Command::Box { x, y, z, w, h, d } => {
            add_box(&mut context.polygons, x, y, z, w, h, d);
            context.render_polygons();
        }

        Command::Sphere { cx, cy, cz, r } => {
            add_sphere(&mut context.polygons, cx, cy, cz, r);
            context.render_polygons();
        }

        Command::Torus { cx, cy, cz, r1, r2 } => {
            add_torus(&mut context.polygons, cx, cy, cz, r1, r2);
            context.render_polygons();
        }

        Command::Scale { sx, sy, sz } => {
            context.coordinate_stack.modify_top(Transform::dilation(sx, sy, sz));
        }

        Command::Move { dx, dy, dz } => {
            context.coordinate_stack.modify_top(Transform::translation(dx, dy, dz));
        }

        Command::Rotate { axis, degrees } => {
            context.coordinate_stack.modify_top(Transform::rotation(axis, degrees));
        }

        Command::Push => {
            context.coordinate_stack.push();
        }

        Command::Pop => {
            context.coordinate_stack.pop();
        }

        Command::Clear => {
            context.picture.clear();
        }

        Command::Display => {
            context.picture.display()?;
        }

        Command::Save { file_path } => {
            context.picture.save_as_file(&file_path)?;
        }

        Command::Quit => {}
    }

    Ok(())
}
