use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use super::describe;
use crate::capture::{CameraError, FrameSource};

/// `HAVE_CURRENT_DATA`: the element has a frame to hand out.
const READY_CURRENT_DATA: u16 = 2;

/// Webcam stream played into a `<video>` element.
pub struct WebCamera {
    video: HtmlVideoElement,
    stream: Option<MediaStream>,
}

impl WebCamera {
    /// Request the default camera (video only) and start playback into `video`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser has no camera API, the user denies
    /// permission, or playback cannot start.
    pub async fn start(video: HtmlVideoElement) -> Result<Self, CameraError> {
        let window = web_sys::window().ok_or_else(|| CameraError::Unavailable("no window".to_owned()))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| CameraError::Unavailable(describe(&e)))?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        constraints.set_audio(&JsValue::FALSE);
        let request = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| CameraError::Stream(describe(&e)))?;
        let stream = JsFuture::from(request)
            .await
            .map_err(|e| CameraError::Stream(describe(&e)))?
            .dyn_into::<MediaStream>()
            .map_err(|e| CameraError::Stream(describe(&e)))?;

        video.set_muted(true);
        video.set_src_object(Some(&stream));
        let mut camera = Self { video, stream: Some(stream) };
        let played = match camera.video.play() {
            Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = played {
            camera.stop();
            return Err(CameraError::Stream(describe(&e)));
        }
        Ok(camera)
    }

    #[must_use]
    pub fn video(&self) -> &HtmlVideoElement {
        &self.video
    }
}

impl FrameSource for WebCamera {
    type Frame = HtmlVideoElement;

    fn is_active(&self) -> bool {
        self.stream.is_some()
            && !self.video.paused()
            && !self.video.ended()
            && self.video.ready_state() >= READY_CURRENT_DATA
    }

    fn frame(&self) -> Option<&HtmlVideoElement> {
        self.stream.as_ref().map(|_| &self.video)
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        let (width, height) = (self.video.video_width(), self.video.video_height());
        (width > 0 && height > 0).then_some((width, height))
    }

    fn stop(&mut self) {
        let Some(stream) = self.stream.take() else {
            return;
        };
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        self.video.set_src_object(None);
    }
}

impl Drop for WebCamera {
    fn drop(&mut self) {
        self.stop();
    }
}
