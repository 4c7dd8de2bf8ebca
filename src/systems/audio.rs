//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`](crate::events::audio::AudioCmd) messages,
//!   emitting [`AudioMessage`](crate::events::audio::AudioMessage) responses.
//! - [`forward_audio_cmds`] sends ECS `AudioCmd` messages over the channel.
//! - [`poll_audio_messages`] non-blockingly drains the audio thread's replies
//!   into the ECS message queue each frame.
//!
//! The design keeps Raylib audio API calls isolated to a single thread, while
//! the main game thread communicates via lock-free channels. A failed load is
//! reported back as a message and the id simply never plays; the game keeps
//! running silently.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Duration;

/// Drain any pending replies from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox. Non-blocking, once per frame.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the bridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send errors on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`] so same-frame readers can
/// observe writes.
pub fn update_bevy_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Entry point of the dedicated audio thread.
///
/// Owns all `Music` and `Sound` handles for the life of the thread, reacts to
/// [`AudioCmd`] inputs, and pumps music streams while they play. Blocks until
/// it receives [`AudioCmd::Shutdown`].
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            warn!("Audio device unavailable ({}); running silent", e);
            // keep draining commands so senders never block, then exit on Shutdown
            for cmd in rx_cmd.iter() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    return;
                }
            }
            return;
        }
    };

    info!("Audio thread running (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        // 1) drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        musics.insert(id.clone(), music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        warn!("Music {:?} failed to load: {}", id, e);
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic { id, looped: repeat } => {
                    if let Some(music) = musics.get(&id) {
                        music.play_stream();
                        playing.insert(id.clone());
                        if repeat {
                            looped.insert(id);
                        } else {
                            looped.remove(&id);
                        }
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                    }
                    playing.remove(&id);
                    looped.remove(&id);
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        warn!("Sound {:?} failed to load: {}", id, e);
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                    }
                }
                AudioCmd::Shutdown => {
                    break 'run;
                }
            }
        }

        // 2) pump music streams, restarting looped tracks that ran out
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                music.update_stream();
                if !music.is_stream_playing() && looped.contains(id) {
                    music.play_stream();
                }
            }
        }

        std::thread::sleep(Duration::from_millis(5));
    }
    // Music/Sound handles drop here, before the device
}
