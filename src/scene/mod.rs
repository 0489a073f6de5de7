//! Frame building for the display sink
//!
//! Converts the current world into flat draw primitives: a triangle-fan
//! circle for the ball, a quad per paddle, and the score labels. How they
//! are rasterized (and how the viewport is letterboxed on resize) is the
//! sink's business, not ours.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameWorld, Paddle};

/// A positioned text label; bitmap fonts belong to the sink
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub pos: Vec2,
    pub text: String,
    pub color: [f32; 4],
}

/// Everything the display sink needs for one redraw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

/// Build the draw primitives for the current world
pub fn build_frame(world: &GameWorld) -> Frame {
    let mut vertices = shapes::circle(
        world.ball.pos,
        world.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    );
    vertices.extend(paddle_quad(&world.left_paddle));
    vertices.extend(paddle_quad(&world.right_paddle));

    let labels = vec![
        score_label(world.score.left, WINDOW_WIDTH * 0.25),
        score_label(world.score.right, WINDOW_WIDTH * 0.75),
    ];

    Frame {
        clear_color: colors::BACKGROUND,
        vertices,
        labels,
    }
}

fn paddle_quad(paddle: &Paddle) -> Vec<Vertex> {
    let half = PADDLE_HEIGHT / 2.0;
    shapes::quad(
        Vec2::new(paddle.x(), paddle.y - half),
        Vec2::new(paddle.x() + PADDLE_WIDTH, paddle.y + half),
        colors::PADDLE,
    )
}

fn score_label(points: u32, x: f32) -> TextLabel {
    TextLabel {
        pos: Vec2::new(x, WINDOW_HEIGHT - 40.0),
        text: points.to_string(),
        color: colors::SCORE_TEXT,
    }
}
