use iced::{
    advanced::{
        layout::{Limits, Node},
        overlay,
        renderer::Style,
        widget::{tree, Operation, Tree},
        Clipboard, Layout, Shell, Widget,
    },
    event::Status,
    mouse::{self, Cursor, Interaction},
    widget::Rule,
    Element, Event, Length, Rectangle, Renderer, Size, Theme, Vector,
};
use std::fmt::{Debug, Formatter};

pub const DRAG_SIZE: f32 = 10.0;

#[derive(Default)]
struct State {
    dragging: bool,
    /// where inside the divider it was grabbed
    grab: f32,
    /// the largest offset last reported through `on_resize`
    reported_max: Option<f32>,
}

/// A horizontal split with a draggable vertical divider.
///
/// The divider sits wherever `offset` says; dragging it only publishes messages, so the
/// owner decides where it ends up.
pub struct VSplit<'a, Message> {
    children: [Element<'a, Message>; 3],
    offset: f32,
    height: Length,
    on_drag: Box<dyn Fn(f32) -> Message + 'a>,
    on_resize: Option<Box<dyn Fn(f32) -> Message + 'a>>,
}

impl<Message> Debug for VSplit<'_, Message> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VSplit")
            .field("offset", &self.offset)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<'a, Message> VSplit<'a, Message>
where
    Message: 'a,
{
    pub fn new(
        left: impl Into<Element<'a, Message>>,
        right: impl Into<Element<'a, Message>>,
        offset: f32,
        on_drag: impl Fn(f32) -> Message + 'a,
    ) -> Self {
        Self {
            children: [left.into(), Rule::vertical(DRAG_SIZE).into(), right.into()],
            offset,
            height: Length::Fill,
            on_drag: Box::new(on_drag),
            on_resize: None,
        }
    }

    /// Publishes the largest offset the divider can take whenever the width changes.
    pub fn on_resize(mut self, on_resize: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_resize = Some(Box::new(on_resize));
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// The largest offset the divider can take in a split `width` pixels wide.
fn max_offset(width: f32) -> f32 {
    (width - DRAG_SIZE).max(0.0)
}

impl<Message> Widget<Message, Theme, Renderer> for VSplit<'_, Message> {
    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, self.height)
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        let limits = limits.width(Length::Fill).height(self.height);
        let max_limits = limits.max();

        let left_width = self
            .offset
            .clamp(0.0, max_offset(max_limits.width));
        let left_limits = Limits::new(Size::ZERO, Size::new(left_width, max_limits.height));

        let right_width = (max_limits.width - left_width - DRAG_SIZE).max(0.0);
        let right_limits = Limits::new(Size::ZERO, Size::new(right_width, max_limits.height));

        let left = self.children[0]
            .as_widget()
            .layout(&mut tree.children[0], renderer, &left_limits);
        let right = self.children[2]
            .as_widget()
            .layout(&mut tree.children[2], renderer, &right_limits)
            .translate(Vector::new(left_width + DRAG_SIZE, 0.0));

        let size = limits.resolve(
            Length::Fill,
            self.height,
            Size::new(
                max_limits.width,
                left.size().height.max(right.size().height),
            ),
        );

        let divider_limits = Limits::new(Size::ZERO, Size::new(DRAG_SIZE, size.height));
        let divider = self.children[1]
            .as_widget()
            .layout(&mut tree.children[1], renderer, &divider_limits)
            .translate(Vector::new(left_width, 0.0));

        Node::with_children(size, vec![left, divider, right])
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        operation.container(None, layout.bounds(), &mut |operation| {
            self.children
                .iter()
                .zip(&mut tree.children)
                .zip(layout.children())
                .for_each(|((child, tree), layout)| {
                    child
                        .as_widget()
                        .operate(tree, layout, renderer, operation);
                });
        });
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> Status {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        if let Some(on_resize) = &self.on_resize {
            let max = max_offset(bounds.width);
            if state.reported_max != Some(max) {
                state.reported_max = Some(max);
                shell.publish(on_resize(max));
            }
        }

        let Some(divider) = layout.children().nth(1) else {
            return Status::Ignored;
        };

        if let Event::Mouse(event) = event {
            match event {
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if let Some(position) = cursor.position_in(divider.bounds()) {
                        state.grab = position.x;
                        state.dragging = true;
                        return Status::Captured;
                    }
                }
                mouse::Event::CursorMoved { .. } if state.dragging => {
                    if let Some(position) = cursor.position() {
                        let offset = (position.x - bounds.x - state.grab)
                            .clamp(0.0, max_offset(bounds.width));
                        shell.publish((self.on_drag)(offset));
                    } else {
                        state.dragging = false;
                    }
                    return Status::Captured;
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) if state.dragging => {
                    state.dragging = false;
                    return Status::Captured;
                }
                _ => {}
            }
        }

        self.children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
            .map(|((child, tree), layout)| {
                child.as_widget_mut().on_event(
                    tree,
                    event.clone(),
                    layout,
                    cursor,
                    renderer,
                    clipboard,
                    shell,
                    viewport,
                )
            })
            .fold(Status::Ignored, Status::merge)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        self.children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .filter(|(_, layout)| layout.bounds().intersects(viewport))
            .for_each(|((child, tree), layout)| {
                child
                    .as_widget()
                    .draw(tree, renderer, theme, style, layout, cursor, viewport);
            });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> Interaction {
        let state = tree.state.downcast_ref::<State>();
        let over_divider = layout
            .children()
            .nth(1)
            .is_some_and(|divider| cursor.position_in(divider.bounds()).is_some());

        if state.dragging || over_divider {
            Interaction::ResizingHorizontally
        } else {
            self.children
                .iter()
                .zip(&tree.children)
                .zip(layout.children())
                .find(|(_, layout)| cursor.position_in(layout.bounds()).is_some())
                .map_or_else(Interaction::default, |((child, tree), layout)| {
                    child
                        .as_widget()
                        .mouse_interaction(tree, layout, cursor, viewport, renderer)
                })
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        overlay::from_children(&mut self.children, tree, layout, renderer, translation)
    }
}

impl<'a, Message> From<VSplit<'a, Message>> for Element<'a, Message>
where
    Message: 'a,
{
    fn from(vsplit: VSplit<'a, Message>) -> Self {
        Self::new(vsplit)
    }
}
