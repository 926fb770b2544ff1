use log::{info, warn};
use opencv::imgproc::{cvt_color, COLOR_BGR2RGBA};
use opencv::prelude::{
    Mat, MatTraitConst, MatTraitConstManual, VideoCaptureTrait, VideoCaptureTraitConst,
};
use opencv::videoio::{self, VideoCapture, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH};

/// Device index of the external USB camera (0 is the built-in one).
pub const USB_CAMERA_INDEX: i32 = 1;
pub const CAPTURE_WIDTH: i32 = 640;
pub const CAPTURE_HEIGHT: i32 = 360;

/// Platform hint for the capture backend.
#[cfg(target_os = "windows")]
pub const CAPTURE_BACKEND: i32 = videoio::CAP_DSHOW;
#[cfg(not(target_os = "windows"))]
pub const CAPTURE_BACKEND: i32 = videoio::CAP_ANY;

/// One captured image, already converted for display. The newest frame
/// replaces the previous one; nothing buffers more than a single frame.
pub struct Frame {
    /// Width and height in pixels.
    pub size: [usize; 2],
    /// Row-major RGBA bytes, converted from the driver's BGR order.
    pub rgba: Vec<u8>,
}

#[derive(Default)]
pub struct Camera {
    source: Option<VideoCapture>,
}

impl Camera {
    /// Opens and configures the capture device. Returns `Ok(false)` when the
    /// device refuses to open (not an error: the caller disables the feed for
    /// the session). Opening an already-open camera is a no-op.
    pub fn open(&mut self, index: i32) -> crate::Result<bool> {
        if self.source.is_some() {
            return Ok(true);
        }

        let mut source = VideoCapture::new(index, CAPTURE_BACKEND)?;
        if !source.is_opened()? {
            return Ok(false);
        }
        source.set(CAP_PROP_FRAME_WIDTH, f64::from(CAPTURE_WIDTH))?;
        source.set(CAP_PROP_FRAME_HEIGHT, f64::from(CAPTURE_HEIGHT))?;

        self.source = Some(source);
        Ok(true)
    }

    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    /// Pulls one frame. `Ok(None)` when the device is closed, the read
    /// fails, or the frame comes back empty; those ticks are skipped and the
    /// previous frame stays on screen.
    pub fn grab_frame(&mut self) -> crate::Result<Option<Frame>> {
        let Some(source) = &mut self.source else {
            return Ok(None);
        };

        let mut frame = Mat::default();
        if !source.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }

        let mut rgba = Mat::default();
        cvt_color(&frame, &mut rgba, COLOR_BGR2RGBA, 0)?;
        assert!(rgba.is_continuous());

        Ok(Some(Frame {
            size: [rgba.cols() as usize, rgba.rows() as usize],
            rgba: rgba.data_bytes()?.into(),
        }))
    }

    /// Releases the device. Taking the handle out of the `Option` makes this
    /// idempotent, so window close and process exit may both call it.
    pub fn release(&mut self) -> crate::Result<()> {
        if let Some(mut source) = self.source.take() {
            source.release()?;
            info!("camera released");
        }
        Ok(())
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!("camera release failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_camera_reports_closed() {
        assert!(!Camera::default().is_open());
    }

    #[test]
    fn grab_without_device_is_a_noop() {
        let mut camera = Camera::default();
        assert!(camera.grab_frame().unwrap().is_none());
        assert!(camera.grab_frame().unwrap().is_none());
    }

    #[test]
    fn release_is_idempotent() {
        let mut camera = Camera::default();
        camera.release().unwrap();
        camera.release().unwrap();
    }
}
