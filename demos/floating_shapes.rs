//! Runs the showcase scene in a window.
//!
//! Assets are read from the directory given as the first argument, or the
//! current directory. Set `ORBIT=1` to orbit the camera with a left drag.

use floating_shapes::prelude::*;

fn main() -> anyhow::Result<()> {
    let asset_root = std::env::args().nth(1).unwrap_or_else(|| ".".into());
    let orbit = std::env::var("ORBIT").is_ok_and(|value| value == "1");

    let config = SceneConfig::default().with_orbit_controls(orbit);
    ShowcaseApp::new(config, asset_root)?.run()
}
