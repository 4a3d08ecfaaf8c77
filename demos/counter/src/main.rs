//! Counter screen built with chained setters
//!
//! A circular container holds a centered count label and a rounded button.
//! Taps are simulated by sending the button's touch events.

use parking_lot::RwLock;
use setkit::prelude::*;
use std::sync::Arc;

struct CounterScreen {
    container: View,
    label: WidgetId,
    button: WidgetId,
    count: Arc<RwLock<i32>>,
}

impl CounterScreen {
    fn new() -> Self {
        let count = Arc::new(RwLock::new(0));

        let mut label = Label::default();
        label.view.set_frame(Rect::new(50.0, 60.0, 100.0, 60.0));
        label
            .set()
            .text("0")
            .font(Font::system(48.0, FontWeight::Bold))
            .text_alignment(TextAlignment::Center)
            .text_color(Color::BLACK);
        let label_id = label.view.id();

        let increment = Arc::clone(&count);
        let mut button = Button::default();
        button.control.view.set_frame(Rect::new(40.0, 130.0, 120.0, 44.0));
        button
            .set()
            .title("Increment")
            .title_label_properties(|title| {
                title
                    .font(Font::system(17.0, FontWeight::Semibold))
                    .text_color(Color::WHITE)
                    .text_alignment(TextAlignment::Center);
            })
            .background_color(Color::SYSTEM_BLUE)
            .corners(ViewShape::RoundedRect(10.0))
            .tap(Action::new(move || {
                *increment.write() += 1;
            }));
        let button_id = button.control.view.id();

        let mut container = View::with_frame(Rect::new(0.0, 0.0, 200.0, 200.0));
        container
            .set()
            .background_color(Color::SYSTEM_GRAY.with_alpha(0.15))
            .corners(ViewShape::Circle)
            .subview(label)
            .subview(button);

        Self {
            container,
            label: label_id,
            button: button_id,
            count,
        }
    }

    fn subview_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.container
            .subviews_mut()
            .iter_mut()
            .find(|subview| subview.view().id() == id)
            .and_then(|subview| subview.downcast_mut::<T>())
    }

    fn tap(&mut self) -> anyhow::Result<()> {
        let button = self
            .subview_mut::<Button>(self.button)
            .ok_or_else(|| anyhow::anyhow!("button missing from the counter screen"))?;
        button.control.send_actions(ControlEvents::TOUCH_UP_INSIDE);

        let text = self.count.read().to_string();
        let label = self
            .subview_mut::<Label>(self.label)
            .ok_or_else(|| anyhow::anyhow!("label missing from the counter screen"))?;
        label.set().text(text);
        Ok(())
    }

    fn label_text(&self) -> &str {
        self.container
            .find(self.label)
            .and_then(|label| label.downcast_ref::<Label>())
            .and_then(|label| label.text.as_deref())
            .unwrap_or_default()
    }
}

fn main() -> anyhow::Result<()> {
    setkit::init()?;

    let mut screen = CounterScreen::new();
    tracing::info!(
        radius = screen.container.layer.corner_radius,
        subviews = screen.container.subviews().len(),
        "counter screen built"
    );
    println!("count: {}", screen.label_text());

    for _ in 0..3 {
        screen.tap()?;
        println!("count: {}", screen.label_text());
    }

    Ok(())
}
