use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path, Rectangle};
use svg::Document;

use crate::error::GeometryError;
use crate::point::Point;
use crate::render::Scene;

/// Canvas settings, all in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    pub width: u32,
    pub height: u32,
    /// Free space around the bounding box of the points.
    pub margin: i32,
    /// Diameter of the dots marking points.
    pub point_size: i32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { width: 800, height: 800, margin: 150, point_size: 12 }
    }
}

pub trait RenderSVG {
    type Canvas;

    /// Render self onto canvas returning the canvas or the reason it could not be drawn.
    fn render(self, canvas: Self::Canvas, options: &SvgOptions) -> Result<Self::Canvas, GeometryError>;
}

fn coord(p: &Point) -> (f32, f32) {
    (p.x() as f32, p.y() as f32)
}

fn dot(p: &Point, options: &SvgOptions, color: &str) -> Circle {
    Circle::new()
        .set("cx", p.x())
        .set("cy", p.y())
        .set("r", options.point_size / 2)
        .set("fill", color)
}

impl RenderSVG for &Scene {
    type Canvas = Document;

    fn render(self, document: Document, options: &SvgOptions) -> Result<Self::Canvas, GeometryError> {
        let bbox = self.cloud().bbox().ok_or(GeometryError::InvalidInput)?;
        let lower_left = bbox.lower_left();
        let margin = options.margin;

        let mut document = document
            .set(
                "viewBox",
                (
                    lower_left.x() - margin,
                    lower_left.y() - margin,
                    bbox.width() + 2 * margin,
                    bbox.height() + 2 * margin,
                ),
            )
            .add(
                Rectangle::new()
                    .set("x", lower_left.x() - margin)
                    .set("y", lower_left.y() - margin)
                    .set("width", bbox.width() + 2 * margin)
                    .set("height", bbox.height() + 2 * margin)
                    .set("fill", "black"),
            );

        let mut points = Group::new().set("id", "points");
        for p in self.cloud().points() {
            points = points.add(dot(&p, options, "yellow"));
        }
        document = document.add(points);

        if let Some(hull) = self.hull() {
            let mut group = Group::new().set("id", "hull");
            if let Some((first, rest)) = hull.vertices().split_first() {
                let mut data = Data::new().move_to(coord(first));
                for p in rest {
                    data = data.line_to(coord(p));
                }
                group = group.add(
                    Path::new()
                        .set("fill", "none")
                        .set("stroke", "white")
                        .set("stroke-width", 1)
                        .set("d", data.close()),
                );
            }
            for p in hull.vertices() {
                group = group.add(dot(p, options, "white"));
            }
            document = document.add(group);
        }

        if let Some(farthest) = self.farthest_pair() {
            let (a, b) = farthest.pair;
            document = document.add(
                Line::new()
                    .set("id", "farthest-pair")
                    .set("x1", a.x())
                    .set("y1", a.y())
                    .set("x2", b.x())
                    .set("y2", b.y())
                    .set("stroke", "red")
                    .set("stroke-width", 2),
            );
        }

        Ok(document)
    }
}

/// Render the scene onto a new document sized by `options`.
pub fn render(scene: &Scene, options: &SvgOptions) -> Result<Document, GeometryError> {
    let document = Document::new()
        .set("width", format!("{}px", options.width))
        .set("height", format!("{}px", options.height));
    scene.render(document, options)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cloud::PointCloud;
    use crate::hull::build_hull;
    use crate::solvers::rotating_calipers;

    fn square() -> Scene {
        let cloud = PointCloud::from_points(&[
            Point::new(0, 0),
            Point::new(0, 10),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(5, 5),
        ]);
        let hull = build_hull(&cloud.points()).unwrap();
        let farthest = rotating_calipers(&hull).unwrap();
        Scene::new(cloud).with_hull(hull).with_farthest_pair(farthest)
    }

    #[test]
    fn full_scene() {
        let document = render(&square(), &SvgOptions::default()).unwrap().to_string();
        assert!(document.contains(r#"viewBox="-150 -150 310 310""#));
        // five points plus four hull vertices
        assert_eq!(document.matches("<circle").count(), 9);
        assert!(document.contains(r#"id="hull""#));
        assert!(document.contains(r#"id="farthest-pair""#));
        assert!(document.contains(r#"stroke="red""#));
    }

    #[test]
    fn missing_results_are_not_drawn() {
        let scene = Scene::new(PointCloud::from_points(&[Point::new(1, 1), Point::new(4, 5)]));
        let document = render(&scene, &SvgOptions::default()).unwrap().to_string();
        assert_eq!(document.matches("<circle").count(), 2);
        assert!(!document.contains(r#"id="hull""#));
        assert!(!document.contains(r#"id="farthest-pair""#));
    }

    #[test]
    fn empty_scene() {
        let scene = Scene::new(PointCloud::from_points(&[]));
        assert_eq!(
            render(&scene, &SvgOptions::default()).map(|_| ()),
            Err(GeometryError::InvalidInput)
        );
    }
}
