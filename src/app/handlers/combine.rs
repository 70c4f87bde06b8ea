//! Handler für Sammelbefehle: Zusammenführen, Aufteilen, Löschen.

use super::{fire_actionable, markers, ModeContext};
use crate::app::events::DrawEvent;
use crate::app::host::RenderHint;
use crate::app::use_cases::combine::{plan_combine, plan_uncombine};
use crate::core::{Feature, FeatureId};

/// Führt die Selektion zu einem Multi-Feature zusammen.
pub fn combine(ctx: &mut ModeContext<'_, '_>) -> RenderHint {
    let (plan, originals) = {
        let selected = ctx.host.store.selected_features();
        let Some(plan) = plan_combine(&selected) else {
            log::debug!(
                "Zusammenführen abgebrochen ({} Features selektiert)",
                selected.len()
            );
            return RenderHint::Skip;
        };
        let originals: Vec<Feature> = selected.into_iter().cloned().collect();
        (plan, originals)
    };

    let new_id = ctx.host.store.add(plan.geometry, plan.properties);
    for original in &originals {
        ctx.host.store.delete(original.id);
    }
    ctx.host.store.set_selected(&[new_id]);
    ctx.host.surface.request_render(new_id);

    let created: Vec<Feature> = ctx.host.store.get(new_id).cloned().into_iter().collect();
    log::info!(
        "{} Features zu Feature {} zusammengeführt",
        originals.len(),
        new_id
    );
    ctx.emit(DrawEvent::CombineFeatures {
        created_features: created,
        deleted_features: originals,
    });

    markers::prune(ctx);
    fire_actionable(ctx);
    RenderHint::Render
}

/// Teilt alle selektierten Multi-Features in Einzel-Features auf.
pub fn uncombine(ctx: &mut ModeContext<'_, '_>) -> RenderHint {
    let selected: Vec<Feature> = ctx.selected_snapshot();
    if selected.is_empty() {
        return RenderHint::Skip;
    }

    let mut created: Vec<Feature> = Vec::new();
    let mut deleted: Vec<Feature> = Vec::new();

    for parent in selected {
        let parts = plan_uncombine(&parent);
        if parts.is_empty() {
            continue;
        }

        for geometry in parts {
            let id = ctx.host.store.add(geometry, parent.properties.clone());
            ctx.host.store.select(id);
            ctx.host.surface.request_render(id);
            if let Some(feature) = ctx.host.store.get(id) {
                created.push(feature.clone());
            }
        }
        ctx.host.store.delete(parent.id);
        deleted.push(parent);
    }

    if created.len() > 1 {
        log::info!(
            "{} Multi-Features in {} Features aufgeteilt",
            deleted.len(),
            created.len()
        );
        ctx.emit(DrawEvent::UncombineFeatures {
            created_features: created,
            deleted_features: deleted,
        });
    }

    markers::prune(ctx);
    fire_actionable(ctx);
    RenderHint::Render
}

/// Löscht alle selektierten Features.
pub fn trash(ctx: &mut ModeContext<'_, '_>) -> RenderHint {
    let ids: Vec<FeatureId> = ctx.host.store.selected_ids().iter().copied().collect();
    if ids.is_empty() {
        return RenderHint::Skip;
    }

    let features = ctx.host.store.delete_many(&ids);
    for feature in &features {
        markers::remove(ctx, feature.id);
    }
    log::info!("{} Features gelöscht", features.len());
    ctx.emit(DrawEvent::Delete { features });

    fire_actionable(ctx);
    RenderHint::Render
}
