use std::fmt;

use crate::coords::{Matrix3, Transform};
use crate::input::InputState;
use crate::surface::Surface;

use super::component::{Component, OwnerCtx};

/// Scene-graph node: a local transform, attached components and child nodes.
///
/// A node exclusively owns its components and children; dropping it drops the
/// whole subtree. Because children are held by value a node can never become
/// its own descendant.
///
/// Traversal order for both update and draw is pre-order: the node's own
/// components in attachment order, then each child subtree in child order.
/// Later components and children therefore paint on top.
pub struct GameObject {
    name: String,
    pub transform: Transform,
    components: Vec<Box<dyn Component>>,
    children: Vec<GameObject>,
}

impl GameObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_component(mut self, component: impl Component + 'static) -> Self {
        self.add_component(component);
        self
    }

    pub fn with_child(mut self, child: GameObject) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_component(&mut self, component: impl Component + 'static) {
        self.components.push(Box::new(component));
    }

    pub fn add_child(&mut self, child: GameObject) {
        self.children.push(child);
    }

    /// Detaches and returns the first direct child named `name`.
    pub fn remove_child(&mut self, name: &str) -> Option<GameObject> {
        let idx = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(idx))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &[Box<dyn Component>] {
        &self.components
    }

    pub fn children(&self) -> &[GameObject] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [GameObject] {
        &mut self.children
    }

    pub fn child(&self, name: &str) -> Option<&GameObject> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Depth-first pre-order search of this subtree, including `self`.
    pub fn find(&self, name: &str) -> Option<&GameObject> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(GameObject::subtree_len).sum::<usize>()
    }

    /// Runs every component's update, then recurses into children.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        let GameObject {
            name,
            transform,
            components,
            children,
        } = self;

        for component in components.iter_mut() {
            let mut owner = OwnerCtx {
                name: name.as_str(),
                transform: &mut *transform,
                children: &mut *children,
                input,
            };
            component.update(&mut owner, dt);
        }

        for child in children.iter_mut() {
            child.update(dt, input);
        }
    }

    /// Draws this subtree.
    ///
    /// `inherited` is the parent's accumulated matrix; the node's local matrix
    /// is composed on its right and handed down unchanged to components and children.
    pub fn draw(&self, surface: &mut dyn Surface, inherited: &Matrix3) {
        let local = Matrix3::matmul(inherited, &self.transform.matrix());

        for component in &self.components {
            component.draw(surface, &local);
        }

        for child in &self.children {
            child.draw(surface, &local);
        }
    }
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.components.iter().map(|c| c.label()).collect();
        f.debug_struct("GameObject")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("components", &labels)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::Vec2;
    use crate::input::Key;
    use crate::surface::Canvas;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Appends `update:<tag>` / `draw:<tag>` to a shared log and remembers the
    /// last matrix it was drawn with.
    struct Probe {
        tag: &'static str,
        log: Log,
        seen: Rc<RefCell<Option<Matrix3>>>,
    }

    impl Probe {
        fn new(tag: &'static str, log: &Log) -> Self {
            Self { tag, log: log.clone(), seen: Rc::new(RefCell::new(None)) }
        }
    }

    impl Component for Probe {
        fn update(&mut self, _owner: &mut OwnerCtx<'_>, _dt: f32) {
            self.log.borrow_mut().push(format!("update:{}", self.tag));
        }

        fn draw(&self, _surface: &mut dyn Surface, matrix: &Matrix3) {
            self.log.borrow_mut().push(format!("draw:{}", self.tag));
            *self.seen.borrow_mut() = Some(*matrix);
        }
    }

    struct Mover {
        speed: f32,
    }

    impl Component for Mover {
        fn update(&mut self, owner: &mut OwnerCtx<'_>, dt: f32) {
            if owner.input.key_down(Key::ArrowRight) {
                owner.transform.translate_by(Vec2::new(self.speed * dt, 0.0));
            }
        }
    }

    fn tree(log: &Log) -> GameObject {
        GameObject::new("root")
            .with_component(Probe::new("C1", log))
            .with_component(Probe::new("C2", log))
            .with_child(
                GameObject::new("child1")
                    .with_component(Probe::new("A", log))
                    .with_child(GameObject::new("grandchild").with_component(Probe::new("G", log))),
            )
            .with_child(GameObject::new("child2").with_component(Probe::new("B", log)))
    }

    fn vec_close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() <= 1e-4 && (a.y - b.y).abs() <= 1e-4
    }

    #[test]
    fn draw_is_pre_order() {
        let log: Log = Rc::default();
        let root = tree(&log);
        let mut canvas = Canvas::new();
        root.draw(&mut canvas, &Matrix3::identity());
        assert_eq!(
            *log.borrow(),
            ["draw:C1", "draw:C2", "draw:A", "draw:G", "draw:B"]
        );
    }

    #[test]
    fn update_is_pre_order() {
        let log: Log = Rc::default();
        let mut root = tree(&log);
        root.update(0.016, &InputState::new());
        assert_eq!(
            *log.borrow(),
            ["update:C1", "update:C2", "update:A", "update:G", "update:B"]
        );
    }

    #[test]
    fn matrices_accumulate_down_three_levels() {
        let log: Log = Rc::default();
        let probe = Probe::new("leaf", &log);
        let seen = probe.seen.clone();

        let parent_t = Transform::new(Vec2::new(100.0, 50.0), 90.0, Vec2::new(2.0, 2.0));
        let child_t = Transform::new(Vec2::new(10.0, 0.0), -45.0, Vec2::one());
        let leaf_t = Transform::new(Vec2::new(0.0, 3.0), 0.0, Vec2::new(1.0, 0.5));

        let root = GameObject::new("parent").with_transform(parent_t).with_child(
            GameObject::new("child")
                .with_transform(child_t)
                .with_child(GameObject::new("leaf").with_transform(leaf_t).with_component(probe)),
        );

        root.draw(&mut Canvas::new(), &Matrix3::identity());

        let expected = Matrix3::matmul(
            &Matrix3::matmul(
                &Matrix3::matmul(&Matrix3::identity(), &parent_t.matrix()),
                &child_t.matrix(),
            ),
            &leaf_t.matrix(),
        );
        let got = seen.borrow().expect("leaf was drawn");

        let p = Vec2::new(1.0, 2.0);
        assert!(vec_close(got.transform_point(p), expected.transform_point(p)));

        // Manual walk: leaf (1,2) → (1,1)+(0,3) = (1,4); child rotates -45° and
        // shifts by (10,0); parent scales ×2, rotates 90°, shifts by (100,50).
        let in_child = child_t.matrix().transform_point(leaf_t.matrix().transform_point(p));
        let in_world = parent_t.matrix().transform_point(in_child);
        assert!(vec_close(got.transform_point(p), in_world));
    }

    #[test]
    fn components_mutate_owner_transform() {
        let mut obj = GameObject::new("player").with_component(Mover { speed: 100.0 });
        let mut input = InputState::new();
        input.key_pressed_event(Key::ArrowRight);

        obj.update(0.5, &input);
        assert_eq!(obj.transform.translation, Vec2::new(50.0, 0.0));

        input.key_released_event(Key::ArrowRight);
        obj.update(0.5, &input);
        assert_eq!(obj.transform.translation, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn owner_ctx_reaches_children() {
        struct Spinner;
        impl Component for Spinner {
            fn update(&mut self, owner: &mut OwnerCtx<'_>, dt: f32) {
                if let Some(moon) = owner.child_mut("moon") {
                    moon.transform.rotate_by(90.0 * dt);
                }
            }
        }

        let mut planet = GameObject::new("planet")
            .with_component(Spinner)
            .with_child(GameObject::new("moon"));
        planet.update(1.0, &InputState::new());
        assert_eq!(planet.child("moon").map(|m| m.transform.rotation), Some(90.0));
    }

    #[test]
    fn lookup_and_removal() {
        let log: Log = Rc::default();
        let mut root = tree(&log);

        assert_eq!(root.subtree_len(), 5);
        assert!(root.find("grandchild").is_some());
        assert!(root.child("grandchild").is_none());
        assert!(root.find("missing").is_none());

        if let Some(g) = root.find_mut("grandchild") {
            g.transform.rotation = 10.0;
        }
        assert_eq!(root.find("grandchild").map(|g| g.transform.rotation), Some(10.0));

        let removed = root.remove_child("child1").expect("child1 exists");
        assert_eq!(removed.subtree_len(), 2);
        assert_eq!(root.subtree_len(), 2);
        assert_eq!(root.children()[0].name(), "child2");
    }

    #[test]
    fn debug_lists_component_labels() {
        let obj = GameObject::new("n").with_component(Mover { speed: 1.0 });
        let s = format!("{obj:?}");
        assert!(s.contains("Mover"));
        assert_eq!(obj.components().len(), 1);
    }
}
