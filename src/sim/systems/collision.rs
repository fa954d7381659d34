//! Collision pass
//!
//! Rebuilds every `Collision2D::colliding_entities` from scratch. Pairs are
//! tested once and recorded on both sides. O(n²), fine for tens of entities.

use crate::sim::components::{Collision2D, ComponentKind};
use crate::sim::ecs::{EcsError, EntityList};

pub fn tick(entities: &mut EntityList) -> Result<(), EcsError> {
    let ids = entities.query(&[ComponentKind::Collision2D]);

    let mut active = Vec::with_capacity(ids.len());
    for id in ids {
        let collision = entities.get_mut::<Collision2D>(id)?;
        collision.reset_collisions();
        if !collision.ignore_collisions {
            active.push((id, collision.collider));
        }
    }

    let mut hits = Vec::new();
    for (i, (a, shape_a)) in active.iter().enumerate() {
        for (b, shape_b) in &active[i + 1..] {
            if shape_a.overlaps(shape_b) {
                hits.push((*a, *b));
            }
        }
    }

    for (a, b) in hits {
        entities.get_mut::<Collision2D>(a)?.add_collision(b);
        entities.get_mut::<Collision2D>(b)?.add_collision(a);
    }
    Ok(())
}
