use console::{Color as TermColor, style};
use value_slider::{Color, SliderRenderer, SliderScene};

/// Draws slider scenes as one line of text, scaled to a fixed column count.
pub struct TerminalRenderer {
    columns: usize,
    frames: usize,
}

impl TerminalRenderer {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(8),
            frames: 0,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Plain-text rendering of the track, without styling.
    pub fn track_line(&self, scene: &SliderScene) -> String {
        let width = scene.container.width.to_f64();
        if width <= 0.0 || scene.track.width.0 <= 0 {
            return "·".repeat(self.columns);
        }
        let column = |x: f64| ((x / width) * self.columns as f64).floor() as isize;
        let track = column(scene.track.x.to_f64())..column(scene.track.right().to_f64());
        let fill_end = column(scene.fill.right().to_f64());
        let handle = column(scene.handle_center.x.to_f64())
            .clamp(track.start, (track.end - 1).max(track.start));

        (0..self.columns as isize)
            .map(|c| {
                if c == handle {
                    'O'
                } else if !track.contains(&c) {
                    ' '
                } else if c < fill_end {
                    '='
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl SliderRenderer for TerminalRenderer {
    fn draw(&mut self, scene: &SliderScene) {
        self.frames += 1;
        let line = self.track_line(scene);
        let marker = if scene.dragging { "*" } else { " " };
        println!(
            "{:>4} [{}] {:<4}{} {} ({}) offset {:>8.2}",
            style(&scene.value_text).bold(),
            style(line).fg(nearest_terminal_color(scene.highlight_color)),
            style(&scene.value_text).bold(),
            marker,
            scene.label,
            scene.icon,
            scene.total_offset_px,
        );
    }
}

fn nearest_terminal_color(color: Color) -> TermColor {
    let [r, g, b, _] = color.to_rgba_u8();
    // 6x6x6 cube of the 256-colour palette.
    let level = |c: u8| (u16::from(c) * 5 / 255) as u8;
    TermColor::Color256(16 + 36 * level(r) + 6 * level(g) + level(b))
}
