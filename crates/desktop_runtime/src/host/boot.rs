use futures::future::try_join;
use leptos::{create_effect, logging, spawn_local, Callable, Callback};
use platform_host::DESKTOP_NODE_ID;

use crate::{
    host::DesktopHostContext, icon_layout::load_icon_positions, reducer::DesktopAction,
    settings::load_settings,
};

pub(super) fn install_boot(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();

        let settings = load_settings(host.kv().as_ref());
        dispatch.call(DesktopAction::HydrateSettings { settings });
        dispatch.call(DesktopAction::LoadDesktop);

        spawn_local(async move {
            let api = host.api();
            let loaded = try_join(api.list_nodes(DESKTOP_NODE_ID), api.boot_config()).await;
            let stored_positions = load_icon_positions(host.kv().as_ref());
            let container_height = host.icon_container_height();

            match loaded {
                Ok((icons, boot_config)) => dispatch.call(DesktopAction::DesktopLoaded {
                    boot_config,
                    icons,
                    stored_positions,
                    container_height,
                }),
                Err(err) => {
                    logging::warn!("desktop load failed, using demo content: {err}");
                    dispatch.call(DesktopAction::DesktopLoadFailed {
                        stored_positions,
                        container_height,
                    });
                }
            }
        });
    });
}
