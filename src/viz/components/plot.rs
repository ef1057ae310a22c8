use crossterm::event::{Event, KeyCode};
use ratatui::{prelude::*, widgets::*};

use crate::viz::{util::event_keycode, Update};

use super::Component;

/// A line chart of one metric against the episode number
pub struct Plot {
    title: &'static str,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    data: Vec<(f64, f64)>,
}

impl Plot {
    fn new(title: &'static str, episodes: u16) -> Self {
        Self {
            title,
            x_bounds: [0.0, episodes.into()],
            y_bounds: [0.0, 1.0],
            data: Vec::new(),
        }
    }

    /// Append a point, growing the y bounds to keep it visible
    fn update(&mut self, point: (f64, f64)) {
        self.y_bounds[0] = self.y_bounds[0].min(point.1);
        self.y_bounds[1] = self.y_bounds[1].max(point.1);
        self.data.push(point);
    }

    fn labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
        let mid = (bounds[0] + bounds[1]) / 2.0;
        [bounds[0], mid, bounds[1]]
            .iter()
            .map(|x| format!("{x:.1}").bold())
            .collect()
    }
}

impl WidgetRef for Plot {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .cyan()
            .data(&self.data);

        let x_axis = Axis::default()
            .title("Episode")
            .dark_gray()
            .labels(Self::labels(self.x_bounds))
            .bounds(self.x_bounds);

        let y_axis = Axis::default()
            .title(self.title)
            .dark_gray()
            .labels(Self::labels(self.y_bounds))
            .bounds(self.y_bounds);

        Chart::new(vec![dataset])
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Learning curve")
                    .padding(Padding::uniform(2)),
            )
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);
    }
}

/// The set of metric plots, one visible at a time, switched with left/right
pub struct Plots {
    names: Vec<&'static str>,
    plots: Vec<Plot>,
    selected: usize,
}

impl Plots {
    pub fn new(names: Vec<&'static str>, episodes: u16) -> Self {
        let plots = names.iter().map(|name| Plot::new(name, episodes)).collect();
        Self {
            names,
            plots,
            selected: 0,
        }
    }

    pub fn update(&mut self, update: Update) {
        let Update { episode, data } = update;
        for (plot, metric) in self.plots.iter_mut().zip(data) {
            plot.update((episode as f64, metric));
        }
    }
}

impl WidgetRef for Plots {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        Tabs::new(self.names.iter().copied())
            .block(Block::default().padding(Padding::uniform(2)))
            .white()
            .highlight_style(Style::default().light_green())
            .select(self.selected)
            .render(area, buf);

        if !self.plots.is_empty() {
            self.plots[self.selected].render_ref(area, buf);
        }
    }
}

impl Component for Plots {
    fn handle_ui_event(&mut self, event: &Event) -> bool {
        let Some(key) = event_keycode(event) else {
            return false;
        };

        let len = self.plots.len();
        if len == 0 {
            return false;
        }

        match key {
            KeyCode::Left => self.selected = (self.selected + len - 1) % len,
            KeyCode::Right => self.selected = (self.selected + 1) % len,
            _ => return false,
        }
        true
    }
}
