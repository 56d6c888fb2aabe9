use crate::{MenuAction, MenuNode, MenuState, MenuTree, ServerEntry, TrayIconAsset, labels};

fn servers(count: usize) -> Vec<ServerEntry> {
    (0..count)
        .map(|i| ServerEntry::new(format!("node{}", i), format!("10.0.0.{}", i), 8388 + i as u16))
        .collect()
}

/// WHAT: Server submenu has one checkbox per server plus the edit entry
/// WHY: The selected server must be the only checked item
#[test]
fn given_servers_and_valid_selection_when_building_submenu_then_only_selected_is_checked() {
    // Given: Four servers with the third selected
    let servers = servers(4);

    // When: Building the submenu
    let items = MenuTree::server_submenu(&servers, Some(2));

    // Then: N+1 items, only item 2 checked, last item is the plain edit entry
    assert_eq!(items.len(), 5);
    for (index, item) in items.iter().take(4).enumerate() {
        assert_eq!(item.checked(), Some(index == 2));
    }
    assert_eq!(
        items[4],
        MenuNode::Action {
            action: MenuAction::EditServers,
            label: labels::EDIT_SERVERS.to_string(),
        }
    );
}

/// WHAT: Out-of-range selection leaves every server unchecked
/// WHY: The menu must not point at a server that does not exist
#[test]
fn given_out_of_range_selection_when_building_submenu_then_nothing_checked() {
    // Given: Two servers and a selection past the end
    let servers = servers(2);

    // When: Building the submenu
    let items = MenuTree::server_submenu(&servers, Some(7));

    // Then: No item is checked
    assert!(items.iter().all(|item| item.checked() != Some(true)));
}

/// WHAT: Server items are labelled remark(host:port)
/// WHY: Users identify servers by this label
#[test]
fn given_server_when_formatting_label_then_remark_host_port() {
    // Given: A server entry
    let server = ServerEntry::new("tokyo", "203.0.113.7", 8388);

    // When/Then: The label combines remark, host and port
    assert_eq!(server.menu_label(), "tokyo(203.0.113.7:8388)");
}

/// WHAT: The context menu has the seven fixed entries in order
/// WHY: Menu layout is part of the visible contract
#[test]
fn given_state_when_building_tree_then_seven_entries_in_order() {
    // Given: A state with the proxy enabled
    let state = MenuState::new(true, false, None);

    // When: Building the tree
    let tree = MenuTree::build(&state, &servers(1));

    // Then: Labels match the fixed layout
    let shown: Vec<&str> = tree.nodes().iter().map(MenuNode::label).collect();
    assert_eq!(
        shown,
        vec![
            labels::ENABLE,
            labels::SERVERS,
            labels::AUTO_LAUNCH,
            labels::QR_SCAN,
            labels::VIEW_LOG,
            labels::OPEN_CONFIG,
            labels::EXIT,
        ]
    );
    assert!(tree.is_checked(MenuAction::ToggleEnable));
    assert!(!tree.is_checked(MenuAction::ToggleAutoLaunch));
}

/// WHAT: Reading the tree returns the state it was built from
/// WHY: read_state inspects the menu, not a separate copy of the flags
#[test]
fn given_tree_when_reading_state_then_flags_and_selection_round_trip() {
    // Given: A tree built with auto-launch on and server 1 selected
    let state = MenuState::new(false, true, Some(1));
    let tree = MenuTree::build(&state, &servers(3));

    // When/Then: Reading it back yields the same state
    assert_eq!(tree.state(), state);
}

/// WHAT: Missing selection reads back as -1
/// WHY: Consumers treat -1 as "no server selected"
#[test]
fn given_no_checked_server_when_reading_index_then_minus_one() {
    // Given: A tree with no servers
    let tree = MenuTree::build(&MenuState::new(true, true, Some(0)), &[]);

    // When: Reading the state
    let state = tree.state();

    // Then: Selection is absent
    assert_eq!(state.selected, None);
    assert_eq!(state.selected_index(), -1);
}

/// WHAT: Menu ids parse back into the action that produced them
/// WHY: Host click events carry only the id
#[test]
fn given_action_ids_when_parsing_then_actions_recovered() {
    // Given: Every kind of action
    let actions = [
        MenuAction::ToggleEnable,
        MenuAction::SelectServer(12),
        MenuAction::EditServers,
        MenuAction::ToggleAutoLaunch,
        MenuAction::QrScan,
        MenuAction::ViewLog,
        MenuAction::OpenConfig,
        MenuAction::Exit,
    ];

    // When/Then: from_id inverts id
    for action in actions {
        assert_eq!(MenuAction::from_id(&action.id()), Some(action));
    }
    assert_eq!(MenuAction::from_id("server_x"), None);
    assert_eq!(MenuAction::from_id("settings"), None);
}

/// WHAT: macOS gets its own tray image, everything else the Windows one
/// WHY: Two fixed assets, one per OS family
#[test]
fn given_os_name_when_choosing_asset_then_matching_file() {
    assert_eq!(TrayIconAsset::for_os("macos").file_name(), "tray_mac.png");
    assert_eq!(TrayIconAsset::for_os("windows").file_name(), "tray_win.png");
    assert_eq!(TrayIconAsset::for_os("linux").file_name(), "tray_win.png");
}
