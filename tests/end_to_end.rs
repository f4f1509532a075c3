use midigen::prelude::*;
use pretty_assertions::assert_eq;

fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[test]
fn single_note_file() {
    let mut file = MidiFile::new();
    file.create_track()
        .note_on(0, "c4", 0, DEFAULT_VELOCITY)
        .unwrap()
        .note_off(0, "c4", 64, DEFAULT_VELOCITY)
        .unwrap();

    let bytes = file.to_bytes().unwrap();

    // header: format 0, one track, 128 ticks
    assert_eq!(&bytes[0..4], b"MThd");
    assert_eq!(be_u32(&bytes[4..8]), 6);
    assert_eq!(&bytes[8..14], &[0, 0, 0, 1, 0, 128]);

    assert_eq!(&bytes[14..18], b"MTrk");
    let events: [u8; 8] = [0x00, 0x90, 60, 90, 0x40, 0x80, 60, 90];
    assert_eq!(be_u32(&bytes[18..22]) as usize, events.len() + 4);
    assert_eq!(&bytes[22..30], &events);
    assert_eq!(&bytes[30..], &[0x00, 0xFF, 0x2F, 0x00]);
}

#[test]
fn every_chunk_length_matches_its_data() {
    let mut file = MidiFile::with_ticks(480).unwrap();
    file.create_track()
        .set_tempo(90, 0)
        .unwrap()
        .set_time_signature(4, 2, 0);
    file.create_track()
        .set_instrument(1, 0, 0)
        .unwrap()
        .note(1, "g3", 1_000_000, 0, 64)
        .unwrap();
    file.create_track()
        .chord(2, &[48, 52, 55, 60], 960, 100)
        .unwrap();

    let bytes = file.to_bytes().unwrap();
    let mut at = 0;
    let mut chunks = Vec::new();
    while at < bytes.len() {
        let id = &bytes[at..at + 4];
        let len = be_u32(&bytes[at + 4..at + 8]) as usize;
        chunks.push((id.to_vec(), len));
        at += 8 + len;
    }
    assert_eq!(at, bytes.len());
    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[0], (b"MThd".to_vec(), 6));
    for (id, _) in &chunks[1..] {
        assert_eq!(id, b"MTrk");
    }
    // format 1, three tracks
    assert_eq!(&bytes[8..12], &[0, 1, 0, 3]);
}

#[test]
fn pre_built_tracks_and_meta_events() {
    let mut track = Track::from_events(vec![
        MetaEvent::copyright("(c) nobody").into(),
        MetaEvent::key_signature(2, false).into(),
    ]);
    track
        .add_event(MetaEvent::marker("verse").with_delta(10))
        .add_event(ChannelEvent::new(0xB0, 5, 64, Some(127)).unwrap());

    let bytes = track.to_bytes().unwrap();
    let len = be_u32(&bytes[4..8]) as usize;
    assert_eq!(len, bytes.len() - 8);
    assert!(bytes.ends_with(&[0x00, 0xB5, 64, 127, 0x00, 0xFF, 0x2F, 0x00]));
}

#[test]
fn serialization_does_not_change_the_file() {
    let mut file = MidiFile::new();
    file.create_track().note(0, "a4", 128, 0, 90).unwrap();
    let before = file.clone();
    let first = file.to_bytes().unwrap();
    let second = file.to_bytes().unwrap();
    assert_eq!(first, second);
    assert_eq!(file, before);
}

#[test]
fn errors_surface_through_the_top_level_type() {
    let mut track = Track::new();
    let err = track.chord::<u8>(0, &[], 128, 90).unwrap_err();
    assert_eq!(err, MidiError::Track(TrackError::EmptyChord));
    assert_eq!(
        err.to_string(),
        "Track: Chord must contain at least one pitch"
    );

    assert!(matches!(
        MidiFile::from_config(&FileConfig { ticks: 40_000 }),
        Err(FileError::InvalidTicks(40_000))
    ));
}

#[test]
fn write_to_any_sink() {
    let mut file = MidiFile::new();
    file.create_track().note(0, 60, 32, 0, 90).unwrap();

    let mut sink = std::io::Cursor::new(Vec::new());
    file.write_to(&mut sink).unwrap();
    assert_eq!(sink.into_inner(), file.to_bytes().unwrap());
}
