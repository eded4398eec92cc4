#![allow(clippy::float_cmp)]

use super::*;

/// Uniform layout: `count` slides of `slide_width`, laid edge to edge.
struct FixedViewport {
    visible_width: f64,
    slide_width: f64,
    count: usize,
}

impl FixedViewport {
    fn new(count: usize) -> Self {
        Self { visible_width: 300.0, slide_width: 100.0, count }
    }
}

impl ViewportBinding for FixedViewport {
    fn visible_width(&self) -> f64 {
        self.visible_width
    }

    fn slide_rect(&self, index: usize) -> Option<crate::geometry::SlideRect> {
        (index < self.count).then(|| {
            #[allow(clippy::cast_precision_loss)]
            let offset = index as f64 * self.slide_width;
            crate::geometry::SlideRect::new(offset, self.slide_width)
        })
    }
}

fn grid_3d() -> CarouselConfig {
    CarouselConfig { desktop_grid_mode: true, is_3d_mode: true, ..CarouselConfig::default() }
}

fn active(count: usize) -> CarouselCore {
    let mut core = CarouselCore::new(CarouselConfig::default());
    core.initialize(SlideSet::anonymous(count), 400.0);
    core
}

fn count_matching(effects: &[Effect], pred: impl Fn(&Effect) -> bool) -> usize {
    effects.iter().filter(|&e| pred(e)).count()
}

fn active_indicators(core: &CarouselCore) -> Vec<usize> {
    core.pagination().indicators().iter().filter(|i| i.active).map(|i| i.index).collect()
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_core_is_idle() {
    let core = CarouselCore::new(CarouselConfig::default());
    assert_eq!(core.phase(), Phase::Idle);
    assert_eq!(core.current_index(), None);
}

#[test]
fn initialize_with_slides_is_active_at_zero() {
    let core = active(5);
    assert_eq!(core.phase(), Phase::Active);
    assert_eq!(core.current_index(), Some(0));
    assert_eq!(core.pagination().len(), 5);
    assert_eq!(active_indicators(&core), vec![0]);
    assert!(core.is_tracking());
    assert!(core.controls_visible());
}

#[test]
fn initialize_effects_in_order() {
    let mut core = CarouselCore::new(CarouselConfig::default());
    let effects = core.initialize(SlideSet::anonymous(2), 400.0);
    assert_eq!(effects[0], Effect::SetControlsVisible(true));
    assert_eq!(effects[1], Effect::MakeSlidesFocusable);
    assert!(matches!(&effects[2], Effect::RenderPagination(ind) if ind.len() == 2));
    assert_eq!(effects[3], Effect::AttachNavigation);
    assert_eq!(effects[4], Effect::StartTracking { threshold: 0.51 });
    assert_eq!(effects.len(), 5);
}

#[test]
fn initialize_3d_marks_first_slide() {
    let mut core = CarouselCore::new(grid_3d());
    let effects = core.initialize(SlideSet::anonymous(3), 600.0);
    assert_eq!(effects.last(), Some(&Effect::SetActiveSlide(0)));
}

#[test]
fn single_slide_is_inactive() {
    let mut core = CarouselCore::new(CarouselConfig::default());
    let effects = core.initialize(SlideSet::anonymous(1), 400.0);
    assert_eq!(core.phase(), Phase::Inactive);
    assert!(!core.controls_visible());
    assert!(core.pagination().is_empty());
    assert!(!core.is_tracking());
    assert_eq!(core.current_index(), None);
    assert_eq!(effects, vec![Effect::SetControlsVisible(false)]);
}

#[test]
fn no_slides_is_inactive() {
    let mut core = CarouselCore::new(CarouselConfig::default());
    core.initialize(SlideSet::default(), 400.0);
    assert_eq!(core.phase(), Phase::Inactive);
    assert!(core.pagination().is_empty());
}

#[test]
fn grid_mode_at_breakpoint_is_inactive() {
    let mut core = CarouselCore::new(grid_3d());
    let effects = core.initialize(SlideSet::anonymous(6), 1280.0);
    assert_eq!(core.phase(), Phase::Inactive);
    assert!(!effects.contains(&Effect::SetActiveSlide(0)));
    assert_eq!(effects, vec![Effect::SetControlsVisible(false)]);
}

#[test]
fn grid_mode_below_breakpoint_is_active() {
    let mut core = CarouselCore::new(grid_3d());
    core.initialize(SlideSet::anonymous(6), 800.0);
    assert_eq!(core.phase(), Phase::Active);
}

#[test]
fn initialize_twice_does_not_accumulate() {
    let mut core = active(4);
    let effects = core.initialize(SlideSet::anonymous(4), 400.0);
    assert_eq!(count_matching(&effects, |e| *e == Effect::DetachNavigation), 1);
    assert_eq!(count_matching(&effects, |e| *e == Effect::AttachNavigation), 1);
    assert_eq!(core.pagination().len(), 4);
}

// =============================================================
// go_to: wrap-around
// =============================================================

#[test]
fn go_to_wraps_for_all_raw_indices() {
    for n in 2_usize..=9 {
        let viewport = FixedViewport::new(n);
        let n_signed = isize::try_from(n).unwrap();
        for r in -20_isize..=20 {
            let mut core = active(n);
            core.go_to(r, &viewport);
            let expected = usize::try_from(((r % n_signed) + n_signed) % n_signed).unwrap();
            assert_eq!(core.current_index(), Some(expected), "r={r} n={n}");
        }
    }
}

#[test]
fn go_to_minus_one_lands_on_last() {
    let mut core = active(5);
    core.go_to(-1, &FixedViewport::new(5));
    assert_eq!(core.current_index(), Some(4));
}

#[test]
fn go_to_count_lands_on_first() {
    let mut core = active(5);
    let viewport = FixedViewport::new(5);
    core.go_to(3, &viewport);
    core.go_to(5, &viewport);
    assert_eq!(core.current_index(), Some(0));
}

#[test]
fn previous_from_first_wraps_to_last() {
    let mut core = active(3);
    core.previous(&FixedViewport::new(3));
    assert_eq!(core.current_index(), Some(2));
}

#[test]
fn next_from_last_wraps_to_first() {
    let mut core = active(3);
    let viewport = FixedViewport::new(3);
    core.go_to(2, &viewport);
    core.next(&viewport);
    assert_eq!(core.current_index(), Some(0));
}

// =============================================================
// go_to: effects
// =============================================================

#[test]
fn go_to_effects_in_order() {
    let mut core = active(9);
    let effects = core.go_to(3, &FixedViewport::new(9));
    assert_eq!(
        effects,
        vec![
            Effect::ScrollTo { left: 200.0 },
            Effect::SetActiveIndicator(3),
            Effect::Announce("Slide 4 of 9".to_owned()),
            Effect::FocusSlide(3),
        ]
    );
}

#[test]
fn go_to_centers_target_slide() {
    let mut core = active(9);
    let viewport = FixedViewport { visible_width: 300.0, slide_width: 100.0, count: 9 };
    let effects = core.go_to(5, &viewport);
    assert_eq!(effects[0], Effect::ScrollTo { left: 400.0 });
}

#[test]
fn go_to_announces_position() {
    let mut core = active(9);
    let effects = core.go_to(3, &FixedViewport::new(9));
    assert!(effects.contains(&Effect::Announce("Slide 4 of 9".to_owned())));
}

#[test]
fn go_to_3d_moves_slide_marker() {
    let mut core = CarouselCore::new(grid_3d());
    core.initialize(SlideSet::anonymous(4), 500.0);
    let effects = core.go_to(2, &FixedViewport::new(4));
    assert!(effects.contains(&Effect::SetActiveSlide(2)));
}

#[test]
fn go_to_without_3d_leaves_slide_marker_alone() {
    let mut core = active(4);
    let effects = core.go_to(2, &FixedViewport::new(4));
    assert_eq!(count_matching(&effects, |e| matches!(e, Effect::SetActiveSlide(_))), 0);
}

#[test]
fn go_to_current_is_noop() {
    let mut core = active(4);
    assert!(core.go_to(0, &FixedViewport::new(4)).is_empty());
    assert!(core.go_to(4, &FixedViewport::new(4)).is_empty());
}

#[test]
fn repeated_go_to_updates_once() {
    let mut core = active(6);
    let viewport = FixedViewport::new(6);
    let mut effects = core.go_to(3, &viewport);
    effects.extend(core.go_to(3, &viewport));
    effects.extend(core.go_to(-3, &viewport));
    assert_eq!(count_matching(&effects, |e| matches!(e, Effect::SetActiveIndicator(_))), 1);
    assert_eq!(count_matching(&effects, |e| matches!(e, Effect::Announce(_))), 1);
    assert_eq!(count_matching(&effects, |e| matches!(e, Effect::ScrollTo { .. })), 1);
}

#[test]
fn exactly_one_indicator_active_after_navigation() {
    let mut core = active(7);
    let viewport = FixedViewport::new(7);
    for raw in [3, -1, 10, 0, 6, 6, -8] {
        core.go_to(raw, &viewport);
        let current = core.current_index().unwrap();
        assert_eq!(active_indicators(&core), vec![current]);
    }
}

#[test]
fn go_to_without_layout_is_ignored() {
    let mut core = active(5);
    let effects = core.go_to(4, &FixedViewport::new(2));
    assert!(effects.is_empty());
    assert_eq!(core.current_index(), Some(0));
}

#[test]
fn go_to_on_inactive_is_noop() {
    let mut core = CarouselCore::new(CarouselConfig::default());
    core.initialize(SlideSet::anonymous(1), 400.0);
    assert!(core.go_to(3, &FixedViewport::new(1)).is_empty());
    assert_eq!(core.current_index(), None);
}

#[test]
fn go_to_on_idle_is_noop() {
    let mut core = CarouselCore::new(CarouselConfig::default());
    assert!(core.go_to(1, &FixedViewport::new(3)).is_empty());
}

// =============================================================
// report_visible / intersections
// =============================================================

#[test]
fn report_visible_updates_without_scroll_or_focus() {
    let mut core = active(5);
    let effects = core.report_visible(2);
    assert_eq!(core.current_index(), Some(2));
    assert_eq!(
        effects,
        vec![Effect::SetActiveIndicator(2), Effect::Announce("Slide 3 of 5".to_owned())]
    );
}

#[test]
fn report_visible_current_is_noop() {
    let mut core = active(5);
    assert!(core.report_visible(0).is_empty());
}

#[test]
fn report_visible_out_of_range_is_ignored() {
    let mut core = active(5);
    assert!(core.report_visible(5).is_empty());
    assert_eq!(core.current_index(), Some(0));
}

#[test]
fn go_to_then_matching_report_is_absorbed() {
    let mut core = active(5);
    core.go_to(3, &FixedViewport::new(5));
    let effects = core.intersections(&[IntersectionSample::new(3, true, 0.8)]);
    assert!(effects.is_empty());
}

#[test]
fn intersections_last_report_wins() {
    let mut core = active(5);
    let effects = core.intersections(&[
        IntersectionSample::new(1, true, 0.6),
        IntersectionSample::new(2, true, 0.3),
        IntersectionSample::new(3, true, 0.9),
    ]);
    assert_eq!(core.current_index(), Some(3));
    assert_eq!(count_matching(&effects, |e| matches!(e, Effect::Announce(_))), 2);
}

#[test]
fn intersections_after_destroy_are_dropped() {
    let mut core = active(5);
    core.destroy();
    assert!(core.intersections(&[IntersectionSample::new(2, true, 1.0)]).is_empty());
}

// =============================================================
// keys / swipes / indicators
// =============================================================

#[test]
fn arrow_right_steps_next_and_is_claimed() {
    let mut core = active(3);
    let effects = core.key_down("ArrowRight", &FixedViewport::new(3)).unwrap();
    assert!(!effects.is_empty());
    assert_eq!(core.current_index(), Some(1));
}

#[test]
fn arrow_left_wraps_to_last() {
    let mut core = active(3);
    core.key_down("ArrowLeft", &FixedViewport::new(3));
    assert_eq!(core.current_index(), Some(2));
}

#[test]
fn unrelated_key_is_not_claimed() {
    let mut core = active(3);
    assert!(core.key_down("Tab", &FixedViewport::new(3)).is_none());
}

#[test]
fn keys_on_inactive_are_not_claimed() {
    let mut core = CarouselCore::new(CarouselConfig::default());
    core.initialize(SlideSet::anonymous(1), 400.0);
    assert!(core.key_down("ArrowRight", &FixedViewport::new(1)).is_none());
}

#[test]
fn long_swipe_advances() {
    let mut core = active(4);
    core.touch_start(200.0);
    core.touch_end(140.0, &FixedViewport::new(4));
    assert_eq!(core.current_index(), Some(1));
}

#[test]
fn short_swipe_is_ignored() {
    let mut core = active(4);
    core.touch_start(200.0);
    let effects = core.touch_end(170.0, &FixedViewport::new(4));
    assert!(effects.is_empty());
    assert_eq!(core.current_index(), Some(0));
}

#[test]
fn rightward_swipe_wraps_back() {
    let mut core = active(4);
    core.touch_start(100.0);
    core.touch_end(260.0, &FixedViewport::new(4));
    assert_eq!(core.current_index(), Some(3));
}

#[test]
fn activate_indicator_goes_to_its_slide() {
    let mut core = active(4);
    core.activate_indicator(2, &FixedViewport::new(4));
    assert_eq!(core.current_index(), Some(2));
}

#[test]
fn activate_unknown_indicator_is_noop() {
    let mut core = active(4);
    assert!(core.activate_indicator(9, &FixedViewport::new(4)).is_empty());
}

// =============================================================
// destroy / reconfigure
// =============================================================

#[test]
fn destroy_tears_down_active_carousel() {
    let mut core = active(4);
    let effects = core.destroy();
    assert_eq!(effects, vec![Effect::StopTracking, Effect::DetachNavigation, Effect::ClearPagination]);
    assert_eq!(core.phase(), Phase::Idle);
    assert!(core.pagination().is_empty());
    assert!(!core.is_tracking());
}

#[test]
fn destroy_is_idempotent() {
    let mut core = active(4);
    core.destroy();
    assert!(core.destroy().is_empty());
}

#[test]
fn destroy_never_initialized_is_noop() {
    let mut core = CarouselCore::new(CarouselConfig::default());
    assert!(core.destroy().is_empty());
}

#[test]
fn destroy_grid_mode_restores_controls() {
    let mut core = CarouselCore::new(grid_3d());
    core.initialize(SlideSet::anonymous(3), 1400.0);
    let effects = core.destroy();
    assert_eq!(effects, vec![Effect::ClearPagination, Effect::SetControlsVisible(true)]);
}

#[test]
fn reconfigure_twice_matches_single_initialize() {
    let mut once = CarouselCore::new(CarouselConfig::default());
    once.initialize(SlideSet::anonymous(9), 400.0);

    let mut twice = CarouselCore::new(CarouselConfig::default());
    twice.initialize(SlideSet::anonymous(9), 400.0);
    twice.go_to(5, &FixedViewport::new(9));
    twice.reconfigure(SlideSet::anonymous(9), 400.0);
    twice.reconfigure(SlideSet::anonymous(9), 400.0);

    assert_eq!(twice.phase(), once.phase());
    assert_eq!(twice.pagination().len(), once.pagination().len());
    assert_eq!(twice.current_index(), once.current_index());
    assert_eq!(active_indicators(&twice), active_indicators(&once));
}

#[test]
fn reconfigure_across_breakpoint_switches_mode() {
    let mut core = CarouselCore::new(grid_3d());
    core.initialize(SlideSet::anonymous(5), 800.0);
    assert_eq!(core.phase(), Phase::Active);

    let effects = core.reconfigure(SlideSet::anonymous(5), 1200.0);
    assert_eq!(core.phase(), Phase::Inactive);
    assert!(effects.contains(&Effect::DetachNavigation));
    assert_eq!(effects.last(), Some(&Effect::SetControlsVisible(false)));

    core.reconfigure(SlideSet::anonymous(5), 800.0);
    assert_eq!(core.phase(), Phase::Active);
    assert_eq!(core.current_index(), Some(0));
}

#[test]
fn reconfigure_picks_up_new_slide_count() {
    let mut core = active(3);
    core.reconfigure(SlideSet::anonymous(6), 400.0);
    assert_eq!(core.pagination().len(), 6);
    assert_eq!(core.slide_count(), 6);
}

// =============================================================
// bind_failed
// =============================================================

#[test]
fn bind_failed_leaves_carousel_inert() {
    let mut core = CarouselCore::new(CarouselConfig::default());
    let err = CarouselError::MissingBinding { role: "viewport", selector: ".nope".to_owned() };
    let effects = core.bind_failed(&err);
    assert!(effects.is_empty());
    assert_eq!(core.phase(), Phase::Inactive);
    assert!(core.go_to(1, &FixedViewport::new(3)).is_empty());
    assert!(core.report_visible(1).is_empty());
}

#[test]
fn bind_failed_tears_down_previous_state() {
    let mut core = active(3);
    let err = CarouselError::MissingBinding { role: "track", selector: "#gone".to_owned() };
    let effects = core.bind_failed(&err);
    assert!(effects.contains(&Effect::StopTracking));
    assert_eq!(core.slide_count(), 0);
}

#[test]
fn bind_failed_on_dom_error_is_also_inert() {
    let mut core = active(3);
    let err = CarouselError::Dom { op: "document", detail: "no document".to_owned() };
    core.bind_failed(&err);
    assert_eq!(core.phase(), Phase::Inactive);
    assert!(!core.is_tracking());
    assert!(core.pagination().is_empty());
}

// =============================================================
// announcement
// =============================================================

#[test]
fn announcement_is_one_based() {
    assert_eq!(announcement(0, 2), "Slide 1 of 2");
    assert_eq!(announcement(3, 9), "Slide 4 of 9");
}
