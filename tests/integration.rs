// SPDX-License-Identifier: MPL-2.0
use iced_notify::config::{self, Config};
use iced_notify::diagnostics::{DiagnosticsCollector, ErrorType};
use iced_notify::notifications::{
    Category, Lifecycle, Manager, ManualClock, NotificationHandle, NotificationOptions, Placement,
    UnitId,
};
use iced_notify::test_utils::{RecordingSurface, SurfaceCall};
use std::time::Duration;
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn manager() -> (Manager<RecordingSurface>, ManualClock) {
    let clock = ManualClock::new();
    let manager = Manager::new(RecordingSurface::default()).with_clock(clock.clone());
    (manager, clock)
}

fn spawn_many(
    manager: &mut Manager<RecordingSurface>,
    placement: Placement,
    count: usize,
) -> Vec<NotificationHandle> {
    (0..count)
        .map(|i| {
            manager
                .notify(
                    NotificationOptions::new()
                        .title(format!("toast {i}"))
                        .at(placement)
                        .auto_close(false),
                )
                .expect("valid placement")
        })
        .collect()
}

#[test]
fn test_stack_indices_follow_spawn_order_in_every_placement() {
    let (mut manager, _) = manager();

    for placement in Placement::ALL {
        let handles = spawn_many(&mut manager, placement, 5);
        assert_eq!(manager.bucket(placement), handles);
        for (i, handle) in handles.iter().enumerate() {
            assert_eq!(manager.stack_index(*handle), Some(i));
            assert_eq!(manager.props(*handle).unwrap().stack_index, i);
        }
    }
    assert_eq!(manager.len(), 25);
}

#[test]
fn test_dismissing_any_position_compacts_bucket() {
    for k in 0..5 {
        let (mut manager, clock) = manager();
        let handles = spawn_many(&mut manager, Placement::LeftTop, 5);

        manager.dismiss(handles[k]);
        // Still in the bucket while the exit transition runs.
        assert_eq!(manager.bucket(Placement::LeftTop).len(), 5);

        clock.advance(ms(300));
        manager.tick();

        let remaining = manager.bucket(Placement::LeftTop);
        assert_eq!(remaining.len(), 4);
        for (position, handle) in remaining.iter().enumerate() {
            assert_eq!(manager.stack_index(*handle), Some(position));
        }
        for (i, earlier) in handles[..k].iter().enumerate() {
            assert_eq!(manager.stack_index(*earlier), Some(i));
        }
        assert_eq!(manager.lifecycle(handles[k]), Lifecycle::Destroyed);
    }
}

#[test]
fn test_followers_receive_new_index_through_surface() {
    let (mut manager, _) = manager();
    let handles = spawn_many(&mut manager, Placement::RightBottom, 3);

    manager.unmount(handles[0], Duration::ZERO);

    let last_update = manager
        .surface()
        .calls()
        .iter()
        .rev()
        .find_map(|call| match call {
            SurfaceCall::Update { unit, props } if *unit == UnitId(2) => Some(props.stack_index),
            _ => None,
        });
    assert_eq!(last_update, Some(1));
    assert_eq!(manager.surface().props(UnitId(1)).unwrap().stack_index, 0);
}

#[test]
fn test_dismiss_all_empties_every_bucket_without_delay() {
    let (mut manager, _) = manager();
    for placement in Placement::ALL {
        spawn_many(&mut manager, placement, 3);
    }

    manager.dismiss_all();

    for placement in Placement::ALL {
        assert!(manager.bucket(placement).is_empty());
    }
    assert_eq!(manager.surface().live_count(), 0);
    assert!(!manager.has_pending_timers());
}

#[test]
fn test_unknown_placement_is_rejected() {
    let (mut manager, _) = manager();
    let mut collector = DiagnosticsCollector::default();
    manager.set_diagnostics(collector.handle());
    spawn_many(&mut manager, Placement::RightTop, 2);

    let result = manager.error(NotificationOptions::new().placement("bottom-center"));

    assert!(result.is_none());
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.surface().live_count(), 2);

    collector.process_pending();
    let error = collector.errors().next().expect("placement error logged");
    assert_eq!(error.error_type, ErrorType::InvalidPlacement);
    assert!(error.message.contains("bottom-center"));
    assert!(error.message.contains("right-top"));
}

#[test]
fn test_persistent_notification_needs_explicit_dismiss() {
    let (mut manager, clock) = manager();
    let handle = manager
        .warning(NotificationOptions::new().auto_close(false))
        .unwrap();

    clock.advance(Duration::from_secs(3600));
    manager.tick();
    assert_eq!(manager.lifecycle(handle), Lifecycle::Visible);
    assert!(manager.props(handle).unwrap().visible);

    manager.dismiss(handle);
    clock.advance(ms(300));
    manager.tick();
    assert!(manager.is_empty());
}

#[test]
fn test_center_notification_timeline() {
    let (mut manager, clock) = manager();
    let handle = manager
        .notify(
            NotificationOptions::new()
                .at(Placement::Center)
                .duration(ms(100))
                .auto_close(true),
        )
        .unwrap();
    let unit = manager.unit(handle).unwrap();
    assert_eq!(manager.stack_index(handle), Some(0));

    clock.advance(ms(99));
    manager.tick();
    assert!(manager.surface().props(unit).unwrap().visible);

    clock.advance(ms(1));
    manager.tick();
    assert!(!manager.surface().props(unit).unwrap().visible);
    assert_eq!(manager.bucket(Placement::Center), vec![handle]);

    clock.advance(ms(299));
    manager.tick();
    assert_eq!(manager.bucket(Placement::Center), vec![handle]);

    clock.advance(ms(1));
    manager.tick();
    assert!(manager.bucket(Placement::Center).is_empty());
    assert!(manager.surface().is_destroyed(unit));
}

#[test]
fn test_update_changes_only_props() {
    let (mut manager, clock) = manager();
    let handles = spawn_many(&mut manager, Placement::RightTop, 3);
    let timed = manager
        .info(NotificationOptions::new().title("old").duration(ms(1000)))
        .unwrap();

    assert!(manager.update(timed, NotificationOptions::new().title("new")));

    let props = manager.props(timed).unwrap();
    assert_eq!(props.title, Some("new".into()));
    assert_eq!(props.category, Some(Category::Info));
    assert_eq!(manager.stack_index(timed), Some(3));
    assert_eq!(manager.bucket(Placement::RightTop)[..3], handles[..]);

    clock.advance(ms(1000));
    manager.tick();
    assert_eq!(manager.lifecycle(timed), Lifecycle::Hiding);
}

#[test]
fn test_independent_placements_do_not_interfere() {
    let (mut manager, clock) = manager();
    let left = spawn_many(&mut manager, Placement::LeftBottom, 2);
    let right = spawn_many(&mut manager, Placement::RightBottom, 2);

    manager.dismiss(left[0]);
    clock.advance(ms(300));
    manager.tick();

    assert_eq!(manager.bucket(Placement::LeftBottom), vec![left[1]]);
    assert_eq!(manager.bucket(Placement::RightBottom), right);
    assert_eq!(manager.stack_index(right[1]), Some(1));
}

#[test]
fn test_config_file_drives_manager_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("notifications.toml");

    let config = Config {
        placement: Some("left-bottom".to_string()),
        duration_ms: Some(500),
        exit_delay_ms: Some(100),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, config);

    let clock = ManualClock::new();
    let mut manager =
        Manager::with_defaults(RecordingSurface::default(), loaded.defaults()).with_clock(clock.clone());
    let handle = manager.success(NotificationOptions::new()).unwrap();
    assert_eq!(handle.placement(), Placement::LeftBottom);

    clock.advance(ms(500));
    manager.tick();
    assert_eq!(manager.lifecycle(handle), Lifecycle::Hiding);

    clock.advance(ms(100));
    manager.tick();
    assert_eq!(manager.lifecycle(handle), Lifecycle::Destroyed);

    dir.close().expect("Failed to close temporary directory");
}
