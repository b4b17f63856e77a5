use graphics2d_core::prelude::*;

/// Returns the coordinates of all pixels of `img` that differ from `bg`.
fn changed_pixels(img: &Image, bg: Color3) -> Vec<(i32, i32)> {
    let (w, h) = img.dims();
    let mut res = Vec::new();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            if img.pixel(x, y) != bg {
                res.push((x, y));
            }
        }
    }
    res
}

#[test]
fn vertical_line_sets_exactly_its_pixels() {
    let mut img = Image::new(300, 200, ColorModel::Rgb).unwrap();
    Primitive::line(Color3::RED, vec2(100.0, 175.0), vec2(100.0, 75.0))
        .draw(&mut img);

    let expected: Vec<_> = (75..=175).map(|y| (100, y)).collect();
    assert_eq!(changed_pixels(&img, Color3::BLACK), expected);
    assert!(expected.iter().all(|&(x, y)| img.pixel(x, y) == Color3::RED));
}

#[test]
fn triangle_has_three_closed_edges() {
    let (a, b, c) = (vec2(10.0, 10.0), vec2(50.0, 20.0), vec2(30.0, 60.0));
    let tri = Primitive::polygon(Color3::BLUE, [a, b, c]);

    let edges: Vec<_> = tri.edges().collect();
    assert_eq!(edges, [line2(a, b), line2(b, c), line2(c, a)]);

    // Drawing the triangle equals drawing its three edges as lines
    let mut img = Image::new(64, 64, ColorModel::Rgb).unwrap();
    tri.draw(&mut img);

    let mut expected = Image::new(64, 64, ColorModel::Rgb).unwrap();
    for e in edges {
        Primitive::line(Color3::BLUE, e.start, e.end).draw(&mut expected);
    }
    assert_eq!(img, expected);
}

#[test]
fn primitives_partly_outside_are_clipped() {
    let mut img = Image::new(20, 10, ColorModel::Gray).unwrap();
    img.clear(7);
    Primitive::rect(Color3::WHITE, vec2(-5.0, -5.0), vec2(25.0, 5.0))
        .draw(&mut img);
    Primitive::point(Color3::WHITE, vec2(19.0, 9.0)).draw(&mut img);

    let changed = changed_pixels(&img, gray(7));
    // The bottom edge of the rectangle, and three pixels of the point
    let mut expected: Vec<_> = (0..20).map(|x| (x, 5)).collect();
    expected.extend([(19, 8), (18, 9), (19, 9)]);
    expected.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(changed, expected);
}

#[test]
fn far_away_coordinates_are_clipped() {
    let mut img = Image::new(8, 10, ColorModel::Rgb).unwrap();
    Primitive::line(Color3::RED, vec2(-2.0e9, 5.0), vec2(2.0e9, 5.0))
        .draw(&mut img);
    Primitive::point(Color3::RED, vec2(3.0e9, 5.0)).draw(&mut img);
    Primitive::point(Color3::RED, vec2(-3.0e9, -3.0e9)).draw(&mut img);

    let expected: Vec<_> = (0..8).map(|x| (x, 5)).collect();
    assert_eq!(changed_pixels(&img, Color3::BLACK), expected);
}

#[cfg(feature = "fp")]
#[test]
fn transformed_square_around_center() {
    use core::f32::consts::FRAC_PI_2;

    let mut sq = Primitive::rect(Color3::RED, vec2(10.0, 10.0), vec2(20.0, 20.0));
    let orig = sq.clone();

    // A quarter turn about the square's own center maps it onto itself
    let tf = rotate(FRAC_PI_2).about(vec2(15.0, 15.0));
    sq.apply_transform(&tf);

    let mut a = Image::new(32, 32, ColorModel::Rgb).unwrap();
    let mut b = Image::new(32, 32, ColorModel::Rgb).unwrap();
    sq.draw(&mut a);
    orig.draw(&mut b);
    assert_eq!(changed_pixels(&a, Color3::BLACK), changed_pixels(&b, Color3::BLACK));
}

#[test]
fn canvas_redraws_after_edits() {
    let mut canvas = Canvas::new(40, 30).unwrap();
    canvas.background = Color3::BLACK;
    canvas.push(Primitive::rect(Color3::GREEN, vec2(5.0, 5.0), vec2(15.0, 15.0)));
    canvas.push(Primitive::line(Color3::RED, vec2(0.0, 0.0), vec2(39.0, 29.0)));
    canvas.redraw();
    assert_eq!(canvas.image().pixel(5, 10), Color3::GREEN);
    assert_eq!(canvas.image().pixel(39, 29), Color3::RED);

    canvas.undo();
    canvas.pan(vec2(16.0, 0.0));
    canvas.redraw();
    assert_eq!(canvas.image().pixel(5, 10), Color3::BLACK);
    assert_eq!(canvas.image().pixel(21, 10), Color3::GREEN);
    assert_eq!(canvas.image().pixel(39, 29), Color3::BLACK);
}
