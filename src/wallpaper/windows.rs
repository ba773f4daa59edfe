use super::BackgroundSetter;
use crate::error::ApodError;
use crate::results::BackgroundOutcome;
use std::path::Path;

/// `SystemParametersInfoW` action that changes the desktop wallpaper
pub const SPI_SETDESKWALLPAPER: u32 = 0x0014;

/// Write the new setting to the user profile
pub const SPIF_UPDATEINIFILE: u32 = 0x0001;

/// Broadcast `WM_SETTINGCHANGE` to all top-level windows
pub const SPIF_SENDWININICHANGE: u32 = 0x0002;

/// The native call behind the Windows setter
pub trait WallpaperApi {
    /// Invoke `SystemParametersInfoW(action, 0, path, flags)`; `true` on success
    fn system_parameters_info(&self, action: u32, path: &Path, flags: u32) -> bool;
}

/// `user32.dll`
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct User32;

#[cfg(windows)]
impl WallpaperApi for User32 {
    fn system_parameters_info(&self, action: u32, path: &Path, flags: u32) -> bool {
        use std::os::windows::ffi::OsStrExt;
        use windows_sys::Win32::UI::WindowsAndMessaging::SystemParametersInfoW;

        let mut wide: Vec<u16> = path
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        // SAFETY: `wide` is a NUL-terminated UTF-16 buffer that outlives the call.
        let result = unsafe { SystemParametersInfoW(action, 0, wide.as_mut_ptr().cast(), flags) };
        result != 0
    }
}

/// Sets the wallpaper through `SystemParametersInfoW`, persisting the change
/// and notifying running applications.
#[derive(Debug, Clone)]
pub struct WindowsBackgroundSetter<A: WallpaperApi> {
    api: A,
}

impl<A: WallpaperApi> WindowsBackgroundSetter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

impl<A: WallpaperApi> BackgroundSetter for WindowsBackgroundSetter<A> {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn set_background(&self, path: Option<&Path>) -> Result<BackgroundOutcome, ApodError> {
        let Some(path) = path else {
            ::log::error!("Internal error: downloaded image path is missing");
            return Ok(BackgroundOutcome::skipped("no image path"));
        };

        // The wallpaper outlives our working directory, so hand over a full path
        let absolute = std::path::absolute(path).map_err(|source| ApodError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        ::log::debug!("Setting desktop background to {}", absolute.display());
        let ok = self.api.system_parameters_info(
            SPI_SETDESKWALLPAPER,
            &absolute,
            SPIF_UPDATEINIFILE | SPIF_SENDWININICHANGE,
        );

        if ok {
            ::log::info!("Background set successfully");
            Ok(BackgroundOutcome::Applied)
        } else {
            ::log::error!("Background could not be set");
            Err(ApodError::WallpaperFailed { path: absolute })
        }
    }
}
