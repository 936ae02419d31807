//! AnyWidget: the closed set of widget kinds a tree can hold.
//!
//! Composite widgets own their children as `Box<AnyWidget>`, so the tree is a
//! plain ownership tree. Adding a widget kind means adding a variant here and
//! its arm in each dispatch below.

use crate::geometry::Rect;
use crate::render::Surface;
use crate::widgets::{BorderedWidget, ListWidget, SplitWidget, TextWidget};

use super::traits::Widget;

/// One node of the widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyWidget {
    Text(TextWidget),
    List(ListWidget),
    Bordered(BorderedWidget),
    Split(SplitWidget),
}

impl AnyWidget {
    /// The first [`ListWidget`] in this subtree, depth-first, children in order.
    pub fn find_list(&self) -> Option<&ListWidget> {
        match self {
            AnyWidget::List(list) => Some(list),
            AnyWidget::Text(_) => None,
            AnyWidget::Bordered(bordered) => bordered.inner().find_list(),
            AnyWidget::Split(split) => split
                .first()
                .find_list()
                .or_else(|| split.second().find_list()),
        }
    }

    /// Mutable variant of [`find_list`](Self::find_list).
    pub fn find_list_mut(&mut self) -> Option<&mut ListWidget> {
        match self {
            AnyWidget::List(list) => Some(list),
            AnyWidget::Text(_) => None,
            AnyWidget::Bordered(bordered) => bordered.inner_mut().find_list_mut(),
            AnyWidget::Split(split) => {
                let (first, second) = split.children_mut();
                match first.find_list_mut() {
                    Some(list) => Some(list),
                    None => second.find_list_mut(),
                }
            }
        }
    }

    fn as_widget(&self) -> &dyn Widget {
        match self {
            AnyWidget::Text(w) => w,
            AnyWidget::List(w) => w,
            AnyWidget::Bordered(w) => w,
            AnyWidget::Split(w) => w,
        }
    }

    fn as_widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            AnyWidget::Text(w) => w,
            AnyWidget::List(w) => w,
            AnyWidget::Bordered(w) => w,
            AnyWidget::Split(w) => w,
        }
    }
}

impl Widget for AnyWidget {
    fn widget_type(&self) -> &'static str {
        self.as_widget().widget_type()
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.as_widget().render(surface);
    }

    fn resize(&mut self, rect: Rect) {
        self.as_widget_mut().resize(rect);
    }

    fn rect(&self) -> Rect {
        self.as_widget().rect()
    }
}

impl From<TextWidget> for AnyWidget {
    fn from(widget: TextWidget) -> Self {
        AnyWidget::Text(widget)
    }
}

impl From<ListWidget> for AnyWidget {
    fn from(widget: ListWidget) -> Self {
        AnyWidget::List(widget)
    }
}

impl From<BorderedWidget> for AnyWidget {
    fn from(widget: BorderedWidget) -> Self {
        AnyWidget::Bordered(widget)
    }
}

impl From<SplitWidget> for AnyWidget {
    fn from(widget: SplitWidget) -> Self {
        AnyWidget::Split(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Axis;

    fn list(lines: &[&str]) -> ListWidget {
        ListWidget::new(lines.iter().copied())
    }

    #[test]
    fn dispatch_reaches_variant() {
        let mut w = AnyWidget::from(TextWidget::new("hi"));
        w.resize(Rect::new(0, 0, 3, 0));
        assert_eq!(w.widget_type(), "Text");
        assert_eq!(w.rect(), Rect::new(0, 0, 3, 0));
    }

    #[test]
    fn find_list_direct() {
        let w = AnyWidget::from(list(&["a"]));
        assert_eq!(w.find_list().unwrap().lines(), ["a"]);
    }

    #[test]
    fn find_list_through_border() {
        let w = AnyWidget::from(BorderedWidget::new(list(&["inner"])));
        assert_eq!(w.find_list().unwrap().lines(), ["inner"]);
    }

    #[test]
    fn find_list_prefers_first_split_child() {
        let split = SplitWidget::new(list(&["first"]), list(&["second"]), Axis::Vertical, 50);
        let mut w = AnyWidget::from(split);
        assert_eq!(w.find_list().unwrap().lines(), ["first"]);
        w.find_list_mut().unwrap().push_line("more");
        assert_eq!(w.find_list().unwrap().lines(), ["first", "more"]);
    }

    #[test]
    fn find_list_falls_back_to_second_child() {
        let split = SplitWidget::new(
            TextWidget::new("t"),
            BorderedWidget::new(list(&["deep"])),
            Axis::Horizontal,
            50,
        );
        let mut w = AnyWidget::from(split);
        assert!(w.find_list_mut().is_some());
        assert_eq!(w.find_list().unwrap().lines(), ["deep"]);
    }

    #[test]
    fn find_list_none_for_text() {
        let mut w = AnyWidget::from(TextWidget::new("x"));
        assert!(w.find_list().is_none());
        assert!(w.find_list_mut().is_none());
    }
}
