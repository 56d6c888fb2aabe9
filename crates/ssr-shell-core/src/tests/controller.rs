use crate::tests::fake_host::{FakeHost, HostCall};
use crate::{MenuAction, MenuState, ServerEntry, ShellError, TrayController, TrayEvent, labels};

fn servers(count: usize) -> Vec<ServerEntry> {
    (0..count)
        .map(|i| ServerEntry::new(format!("node{}", i), "127.0.0.1", 1080 + i as u16))
        .collect()
}

/// WHAT: Setup creates the icon, tooltip and menu in that order
/// WHY: The host must have an icon before a menu can be attached
#[test]
#[allow(clippy::unwrap_used)]
fn given_host_when_setting_up_then_icon_tooltip_and_menu_applied() {
    // Given: A recording host
    let host = FakeHost::default();
    let calls = host.calls.clone();

    // When: Setting up the controller
    let (_controller, _events) =
        TrayController::setup(host, MenuState::new(true, false, Some(0)), servers(2)).unwrap();

    // Then: Three host calls in order
    let calls = calls.borrow();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], HostCall::CreateIcon(_)));
    assert_eq!(calls[1], HostCall::SetTooltip(labels::TOOLTIP.to_string()));
    assert!(matches!(calls[2], HostCall::SetContextMenu(_)));
}

/// WHAT: read_state right after setup returns the initial state
/// WHY: The menu reflects the configuration it was created from
#[test]
#[allow(clippy::unwrap_used)]
fn given_initial_state_when_reading_without_interaction_then_same_state() {
    // Given: Enable on, auto-launch off, server 2 selected
    let initial = MenuState::new(true, false, Some(2));

    // When: Setting up and reading back
    let (controller, _events) =
        TrayController::setup(FakeHost::default(), initial, servers(3)).unwrap();

    // Then: Flags and selection are unchanged
    let state = controller.read_state();
    assert_eq!(state, initial);
    assert_eq!(state.selected_index(), 2);
}

/// WHAT: Out-of-range initial selection reads back as -1
/// WHY: Nothing is checked when the index does not match a server
#[test]
#[allow(clippy::unwrap_used)]
fn given_out_of_range_selection_when_setting_up_then_selected_is_minus_one() {
    // Given/When: Selection 5 with only two servers
    let (controller, _events) = TrayController::setup(
        FakeHost::default(),
        MenuState::new(false, false, Some(5)),
        servers(2),
    )
    .unwrap();

    // Then: No selection
    assert_eq!(controller.read_state().selected_index(), -1);
}

/// WHAT: Clicking a server leaves exactly that server checked
/// WHY: Server selection is mutually exclusive for every click sequence
#[test]
#[allow(clippy::unwrap_used)]
fn given_click_sequence_when_selecting_servers_then_exactly_one_checked() {
    // Given: Four servers with server 0 selected
    let (mut controller, mut events) = TrayController::setup(
        FakeHost::default(),
        MenuState::new(true, false, Some(0)),
        servers(4),
    )
    .unwrap();

    for index in [3, 1, 1, 2, 0] {
        // When: Clicking server `index`
        controller
            .handle_menu_click(&MenuAction::SelectServer(index).id())
            .unwrap();

        // Then: Only that item is checked and its position was emitted
        let checked: Vec<usize> = controller
            .menu()
            .server_items()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.checked() == Some(true))
            .map(|(position, _)| position)
            .collect();
        assert_eq!(checked, vec![index]);
        assert_eq!(events.try_recv().unwrap(), TrayEvent::ServerSelected(index));
    }
}

/// WHAT: Toggles flip their flag and emit the new value
/// WHY: Consumers persist the value carried by the event
#[test]
#[allow(clippy::unwrap_used)]
fn given_toggles_when_clicked_then_events_carry_new_values() {
    // Given: Both toggles off
    let (mut controller, mut events) = TrayController::setup(
        FakeHost::default(),
        MenuState::new(false, false, None),
        servers(1),
    )
    .unwrap();

    // When: Clicking enable twice and auto-launch once
    controller.handle_menu_click("enable").unwrap();
    controller.handle_menu_click("enable").unwrap();
    controller.handle_menu_click("auto_launch").unwrap();

    // Then: Events are emitted in click order with the new values
    assert_eq!(events.try_recv().unwrap(), TrayEvent::EnableToggled(true));
    assert_eq!(events.try_recv().unwrap(), TrayEvent::EnableToggled(false));
    assert_eq!(events.try_recv().unwrap(), TrayEvent::AutoLaunchToggled(true));
    assert!(events.try_recv().is_err());

    let state = controller.read_state();
    assert!(!state.enable);
    assert!(state.auto_launch);
}

/// WHAT: Plain items emit their request events
/// WHY: Each auxiliary action maps to one named event
#[test]
#[allow(clippy::unwrap_used)]
fn given_action_items_when_clicked_then_request_events_emitted() {
    // Given: A controller
    let host = FakeHost::default();
    let (mut controller, mut events) =
        TrayController::setup(host.clone(), MenuState::default(), servers(1)).unwrap();
    let menus_before = host.menus_applied();

    // When: Clicking every action item and the icon
    for id in ["edit_servers", "qr_scan", "view_log", "open_config", "exit"] {
        controller.handle_menu_click(id).unwrap();
    }
    controller.handle_icon_click();

    // Then: Events arrive in order and the menu was not re-applied
    let expected = [
        TrayEvent::OpenRequested,
        TrayEvent::QrScanRequested,
        TrayEvent::OpenLogRequested,
        TrayEvent::OpenConfigRequested,
        TrayEvent::ExitRequested,
        TrayEvent::OpenRequested,
    ];
    for event in expected {
        assert_eq!(events.try_recv().unwrap(), event);
    }
    assert_eq!(host.menus_applied(), menus_before);
}

/// WHAT: Unknown ids and stale server indices are ignored
/// WHY: Clicks on menus from before a refresh must not emit events
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_or_stale_ids_when_clicked_then_nothing_emitted() {
    // Given: Two servers
    let (mut controller, mut events) = TrayController::setup(
        FakeHost::default(),
        MenuState::new(false, false, Some(1)),
        servers(2),
    )
    .unwrap();

    // When: Clicking an unknown id and a server past the end
    controller.handle_menu_click("settings").unwrap();
    controller.handle_menu_click("server_9").unwrap();

    // Then: No events and the selection is unchanged
    assert!(events.try_recv().is_err());
    assert_eq!(controller.read_state().selected, Some(1));
}

/// WHAT: Refresh replaces the submenu and keeps the toggles
/// WHY: Editing servers must not change proxy or auto-launch state
#[test]
#[allow(clippy::unwrap_used)]
fn given_toggled_state_when_refreshing_then_submenu_replaced_and_toggles_kept() {
    // Given: Enable on, auto-launch toggled on by a click
    let host = FakeHost::default();
    let (mut controller, _events) =
        TrayController::setup(host.clone(), MenuState::new(true, false, Some(0)), servers(2))
            .unwrap();
    controller.handle_menu_click("auto_launch").unwrap();

    // When: Refreshing with five servers and selection 4
    controller.refresh(servers(5), Some(4)).unwrap();

    // Then: M+1 submenu items on the applied menu, toggles unchanged
    let applied = host.last_menu().unwrap();
    assert_eq!(applied.server_items().len(), 6);
    assert_eq!(applied, *controller.menu());

    let state = controller.read_state();
    assert!(state.enable);
    assert!(state.auto_launch);
    assert_eq!(state.selected, Some(4));
}

/// WHAT: Refresh without a valid selection leaves nothing checked
/// WHY: read_state reports -1 until the user picks a server
#[test]
#[allow(clippy::unwrap_used)]
fn given_refresh_with_invalid_selection_when_reading_then_minus_one() {
    // Given: A controller with a selection
    let (mut controller, _events) = TrayController::setup(
        FakeHost::default(),
        MenuState::new(false, false, Some(0)),
        servers(3),
    )
    .unwrap();

    // When: Refreshing with a shorter list and no selection
    controller.refresh(servers(1), None).unwrap();

    // Then: Selection is absent
    assert_eq!(controller.read_state().selected_index(), -1);
    assert_eq!(controller.menu().server_items().len(), 2);
}

/// WHAT: Host menu failures propagate from setup
/// WHY: Tray host errors are surfaced, not swallowed
#[test]
fn given_failing_host_when_setting_up_then_host_error() {
    // Given: A host that rejects menus
    let host = FakeHost::failing_menu();

    // When: Setting up
    let result = TrayController::setup(host, MenuState::default(), servers(1));

    // Then: HostOperationFailed
    assert!(matches!(
        result,
        Err(ShellError::HostOperationFailed { operation: "set_context_menu", .. })
    ));
}

/// WHAT: Teardown destroys the host icon
/// WHY: The OS tray resource must be released on shutdown
#[test]
#[allow(clippy::unwrap_used)]
fn given_controller_when_tearing_down_then_host_destroyed() {
    // Given: A controller
    let host = FakeHost::default();
    let (controller, _events) =
        TrayController::setup(host.clone(), MenuState::default(), servers(0)).unwrap();

    // When: Tearing down
    controller.teardown().unwrap();

    // Then: Destroy was the last host call
    assert_eq!(host.calls.borrow().last(), Some(&HostCall::Destroy));
}

/// WHAT: Emitting after the consumer is gone does not fail the click
/// WHY: Events are fire-and-forget
#[test]
#[allow(clippy::unwrap_used)]
fn given_dropped_receiver_when_clicking_then_click_still_succeeds() {
    // Given: A controller whose receiver was dropped
    let (mut controller, events) =
        TrayController::setup(FakeHost::default(), MenuState::default(), servers(1)).unwrap();
    drop(events);

    // When/Then: Clicking still updates the menu
    controller.handle_menu_click("enable").unwrap();
    assert!(controller.read_state().enable);
}
