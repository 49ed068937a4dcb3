use std::error::Error;

use image::RgbImage;
use show_image::{ImageInfo, ImageView, create_window, event};

/// The drawing surface: an RGB8 pixel buffer plus a z-buffer.
///
/// Geometry lives in a y-up coordinate system; `plot` flips y so row 0 of the
/// buffer is the top of the image. Larger z is closer to the viewer.
pub struct Picture {
    pub xres: usize,
    pub yres: usize,
    pub data: Vec<u8>,
    zbuffer: Vec<f32>,
    background: (usize, usize, usize),
}

impl Picture {
    pub fn new(xres: usize, yres: usize, background: &(usize, usize, usize)) -> Self {
        let mut picture = Self {
            xres,
            yres,
            data: vec![0; xres * yres * 3],
            zbuffer: vec![f32::NEG_INFINITY; xres * yres],
            background: *background,
        };
        picture.clear();
        picture
    }

    pub fn clear(&mut self) {
        let (r, g, b) = self.background;
        for pixel in self.data.chunks_exact_mut(3) {
            pixel[0] = r as u8;
            pixel[1] = g as u8;
            pixel[2] = b as u8;
        }
        self.zbuffer.fill(f32::NEG_INFINITY);
    }

    pub fn plot(&mut self, x: isize, y: isize, z: f32, color: &(usize, usize, usize)) {
        if x < 0 || y < 0 || x >= self.xres as isize || y >= self.yres as isize {
            return;
        }

        let index = (self.yres - 1 - y as usize) * self.xres + x as usize;
        if z > self.zbuffer[index] {
            self.zbuffer[index] = z;
            self.data[index * 3] = color.0 as u8;
            self.data[index * 3 + 1] = color.1 as u8;
            self.data[index * 3 + 2] = color.2 as u8;
        }
    }

    /// DDA line with linear z interpolation.
    pub fn draw_line(&mut self, x0: isize, y0: isize, z0: f32, x1: isize, y1: isize, z1: f32, color: &(usize, usize, usize)) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        if steps == 0 {
            self.plot(x0, y0, z0.max(z1), color);
            return;
        }

        let x_step = (x1 - x0) as f32 / steps as f32;
        let y_step = (y1 - y0) as f32 / steps as f32;
        let z_step = (z1 - z0) / steps as f32;

        let (mut x, mut y, mut z) = (x0 as f32, y0 as f32, z0);
        for _ in 0..=steps {
            self.plot(x.round() as isize, y.round() as isize, z, color);
            x += x_step;
            y += y_step;
            z += z_step;
        }
    }

    /// One horizontal span of a filled triangle.
    pub fn draw_scanline(&mut self, x0: isize, z0: f32, x1: isize, z1: f32, y: isize, color: &(usize, usize, usize)) {
        let (x0, z0, x1, z1) = if x0 > x1 { (x1, z1, x0, z0) } else { (x0, z0, x1, z1) };

        let z_step = if x1 > x0 { (z1 - z0) / (x1 - x0) as f32 } else { 0.0 };
        let mut z = z0;
        for x in x0..=x1 {
            self.plot(x, y, z, color);
            z += z_step;
        }
    }

    pub fn save_as_file(&self, path: &str) -> Result<(), Box<dyn Error>> {
        let image = RgbImage::from_raw(self.xres as u32, self.yres as u32, self.data.clone())
            .ok_or("pixel buffer does not match picture dimensions")?;
        image.save(path)?;
        Ok(())
    }

    /// Opens a window showing the current buffer and blocks until it is
    /// closed or escape is pressed.
    pub fn display(&self) -> Result<(), Box<dyn Error>> {
        let image = ImageView::new(ImageInfo::rgb8(self.xres as u32, self.yres as u32), &self.data);

        let window = create_window("etch", Default::default())?;
        window.set_image("picture", image)?;

        for event in window.event_channel()? {
            if let event::WindowEvent::KeyboardInput(event) = event
                && event.input.key_code == Some(event::VirtualKeyCode::Escape)
                && event.input.state.is_pressed()
            {
                break;
            }
        }

        Ok(())
    }
}
