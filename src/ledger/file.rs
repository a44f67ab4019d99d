use super::*;
use anyhow::Context;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Where the encoded league is written.
#[derive(Debug)]
enum Backing {
    /// Replaced whole through a synced sibling file and a rename.
    Path(PathBuf),
    /// Adopted handle, rewritten in place.
    Handle(File),
}

impl Backing {
    fn try_clone(&self) -> std::io::Result<Self> {
        match self {
            Self::Path(path) => Ok(Self::Path(path.clone())),
            Self::Handle(file) => file.try_clone().map(Self::Handle),
        }
    }
    /// Blocking. Either the old or the new contents survive a crash on `Path`.
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        match self {
            Self::Path(path) => Self::replace(path, bytes),
            Self::Handle(file) => {
                file.set_len(0)?;
                file.seek(SeekFrom::Start(0))?;
                file.write_all(bytes)?;
                file.sync_data()
            }
        }
    }
    fn replace(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let temp = Self::sibling(path);
        let result = File::create(&temp)
            .and_then(|mut file| file.write_all(bytes).and_then(|_| file.sync_all()))
            .and_then(|_| std::fs::rename(&temp, path));
        if result.is_err() {
            let _ = std::fs::remove_file(&temp);
        }
        result?;
        #[cfg(unix)]
        {
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            File::open(dir)?.sync_all()?;
        }
        Ok(())
    }
    fn sibling(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

/// Backing store plus the league it currently holds.
/// Both change together under the write lock.
#[derive(Debug)]
struct Tape {
    backing: Backing,
    league: League,
}

impl Tape {
    /// Replaces the stored league with `league` and syncs it to disk,
    /// off the async worker.
    async fn rewrite(&self, league: &League) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec(league).context("encode league")?;
        let mut backing = self.backing.try_clone().context("clone player db handle")?;
        tokio::task::spawn_blocking(move || backing.write(&bytes)).await??;
        Ok(())
    }
}

/// Ledger persisted as a JSON array of `{"Name", "Wins"}` objects.
///
/// Every win rewrites the full array before `record` returns,
/// so a completed call is never lost.
#[derive(Debug)]
pub struct FileLedger {
    name: String,
    tape: RwLock<Tape>,
}

impl FileLedger {
    /// Opens (creating if missing) the league file at `path`.
    /// Writes replace the file atomically.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("problem opening {}", name));
            }
        };
        Self::load(text, Backing::Path(path.to_path_buf()), name)
    }
    /// Adopts an already opened read-write handle. Writes truncate and
    /// rewrite it in place.
    pub fn from_file(mut file: File) -> anyhow::Result<Self> {
        let name = String::from("<file>");
        let mut text = String::new();
        file.seek(SeekFrom::Start(0))
            .and_then(|_| file.read_to_string(&mut text))
            .with_context(|| format!("problem reading player db file {}", name))?;
        Self::load(text, Backing::Handle(file), name)
    }
    fn load(text: String, mut backing: Backing, name: String) -> anyhow::Result<Self> {
        let league = match text.trim() {
            "" => {
                backing
                    .write(b"[]")
                    .with_context(|| format!("problem initialising player db file {}", name))?;
                League::default()
            }
            json => serde_json::from_str::<League>(json)
                .with_context(|| format!("problem loading player store from file {}", name))?,
        };
        log::info!("[ledger] loaded {} players from {}", league.len(), name);
        Ok(Self {
            name,
            tape: RwLock::new(Tape { backing, league }),
        })
    }
}

#[async_trait::async_trait]
impl Ledger for FileLedger {
    async fn find(&self, name: &str) -> Option<Player> {
        self.tape.read().await.league.find(name).cloned()
    }
    async fn record(&self, name: &str) -> anyhow::Result<()> {
        let mut tape = self.tape.write().await;
        let mut league = tape.league.clone();
        league.record(name);
        tape.rewrite(&league)
            .await
            .with_context(|| format!("problem writing player db file {}", self.name))?;
        tape.league = league;
        log::debug!("[ledger] recorded win for {}", name);
        Ok(())
    }
    async fn league(&self) -> League {
        self.tape.read().await.league.ranked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::OpenOptions;
    use std::sync::Arc;

    /// Temp file seeded with `data`, removed on drop.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(data: &str) -> Self {
            let path = std::env::temp_dir().join(format!("league-{}.json", uuid::Uuid::now_v7()));
            std::fs::write(&path, data).expect("seed temp file");
            Self(path)
        }
        fn contents(&self) -> String {
            std::fs::read_to_string(&self.0).expect("read temp file")
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    const SEED: &str = r#"[
        {"Name": "Cleo", "Wins": 10},
        {"Name": "Chris", "Wins": 33}]"#;

    #[tokio::test]
    async fn league_from_file_is_sorted() {
        let scratch = Scratch::new(SEED);
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        let want = League::from(vec![Player::new("Chris", 33), Player::new("Cleo", 10)]);
        assert_eq!(ledger.league().await, want);
        assert_eq!(ledger.league().await, want);
    }
    #[tokio::test]
    async fn score_from_file() {
        let scratch = Scratch::new(SEED);
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        assert_eq!(ledger.score("Chris").await, 33);
        assert_eq!(ledger.score("Apollo").await, 0);
    }
    #[tokio::test]
    async fn win_for_existing_player() {
        let scratch = Scratch::new(SEED);
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        ledger.record("Chris").await.expect("record");
        assert_eq!(ledger.score("Chris").await, 34);
        assert_eq!(
            ledger.league().await,
            League::from(vec![Player::new("Chris", 34), Player::new("Cleo", 10)])
        );
    }
    #[tokio::test]
    async fn win_for_new_player() {
        let scratch = Scratch::new(SEED);
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        ledger.record("Pepper").await.expect("record");
        assert_eq!(ledger.score("Pepper").await, 1);
    }
    #[tokio::test]
    async fn every_win_is_written_through() {
        let scratch = Scratch::new(SEED);
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        ledger.record("Chris").await.expect("record");
        let on_disk = serde_json::from_str::<League>(&scratch.contents()).expect("parse file");
        assert_eq!(
            on_disk,
            League::from(vec![Player::new("Cleo", 10), Player::new("Chris", 34)])
        );
        let reopened = FileLedger::open(&scratch.0).expect("reopen ledger");
        assert_eq!(reopened.score("Chris").await, 34);
    }
    #[tokio::test]
    async fn shrinking_rewrite_leaves_no_trailing_bytes() {
        let scratch = Scratch::new(&format!("{}{}", SEED, " ".repeat(256)));
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        ledger.record("Cleo").await.expect("record");
        assert_eq!(
            scratch.contents(),
            r#"[{"Name":"Cleo","Wins":11},{"Name":"Chris","Wins":33}]"#
        );
    }
    #[tokio::test]
    async fn empty_file_starts_empty() {
        let scratch = Scratch::new("");
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        assert!(ledger.league().await.is_empty());
        assert_eq!(scratch.contents(), "[]");
        for _ in 0..3 {
            ledger.record("Pepper").await.expect("record");
        }
        assert_eq!(ledger.score("Pepper").await, 3);
    }
    #[tokio::test]
    async fn empty_array_file() {
        let scratch = Scratch::new("[]");
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        for _ in 0..3 {
            ledger.record("Pepper").await.expect("record");
        }
        assert_eq!(ledger.score("Pepper").await, 3);
    }
    #[tokio::test]
    async fn missing_file_is_created() {
        let path = std::env::temp_dir().join(format!("league-{}.json", uuid::Uuid::now_v7()));
        let scratch = Scratch(path);
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        assert!(ledger.league().await.is_empty());
        assert_eq!(scratch.contents(), "[]");
    }
    #[tokio::test]
    async fn corrupt_file_fails_fast() {
        let scratch = Scratch::new("this is not json");
        let error = FileLedger::open(&scratch.0).expect_err("corrupt file must not load");
        assert!(format!("{:#}", error).contains("problem loading player store"));
        assert_eq!(scratch.contents(), "this is not json");
    }
    #[tokio::test]
    async fn open_leaves_no_temp_file() {
        let scratch = Scratch::new(SEED);
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        ledger.record("Cleo").await.expect("record");
        assert!(!Backing::sibling(&scratch.0).exists());
        assert_eq!(
            serde_json::from_str::<League>(&scratch.contents()).expect("parse file"),
            League::from(vec![Player::new("Cleo", 11), Player::new("Chris", 33)])
        );
    }
    #[tokio::test]
    async fn stale_temp_file_is_overwritten() {
        let scratch = Scratch::new(SEED);
        let temp = Backing::sibling(&scratch.0);
        std::fs::write(&temp, "half a leag").expect("seed stale temp");
        let ledger = FileLedger::open(&scratch.0).expect("open ledger");
        ledger.record("Chris").await.expect("record");
        assert!(!temp.exists());
        let reopened = FileLedger::open(&scratch.0).expect("reopen ledger");
        assert_eq!(reopened.score("Chris").await, 34);
    }
    #[tokio::test]
    async fn failed_write_leaves_league_unchanged() {
        let scratch = Scratch::new(SEED);
        let file = OpenOptions::new()
            .read(true)
            .open(&scratch.0)
            .expect("open read-only handle");
        let ledger = FileLedger::from_file(file).expect("adopt handle");
        let before = ledger.league().await;
        let error = ledger.record("Cleo").await.expect_err("read-only handle cannot be written");
        assert!(format!("{:#}", error).contains("problem writing player db file"));
        assert_eq!(ledger.score("Cleo").await, 10);
        assert_eq!(ledger.find("Pepper").await, None);
        assert!(ledger.record("Pepper").await.is_err());
        assert_eq!(ledger.find("Pepper").await, None);
        assert_eq!(ledger.league().await, before);
        assert_eq!(scratch.contents(), SEED);
    }
    #[tokio::test]
    async fn unwritable_directory_fails_to_initialise() {
        let path = std::env::temp_dir()
            .join(format!("missing-{}", uuid::Uuid::now_v7()))
            .join("league.json");
        let error = FileLedger::open(&path).expect_err("parent directory does not exist");
        assert!(format!("{:#}", error).contains("problem initialising player db file"));
        assert!(!path.exists());
    }
    #[tokio::test]
    async fn from_open_handle() {
        let scratch = Scratch::new(SEED);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&scratch.0)
            .expect("open handle");
        let ledger = FileLedger::from_file(file).expect("adopt handle");
        assert_eq!(ledger.score("Cleo").await, 10);
        ledger.record("Cleo").await.expect("record");
        assert_eq!(
            scratch.contents(),
            r#"[{"Name":"Cleo","Wins":11},{"Name":"Chris","Wins":33}]"#
        );
    }
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_wins_are_never_lost() {
        let scratch = Scratch::new("[]");
        let ledger = Arc::new(FileLedger::open(&scratch.0).expect("open ledger"));
        let tasks = ["Pepper", "Pepper", "John"]
            .iter()
            .copied()
            .cycle()
            .take(60)
            .map(|name| {
                let ledger = ledger.clone();
                tokio::spawn(async move { ledger.record(name).await })
            })
            .collect::<Vec<_>>();
        for task in futures::future::join_all(tasks).await {
            task.expect("join").expect("record");
        }
        assert_eq!(ledger.score("Pepper").await, 40);
        assert_eq!(ledger.score("John").await, 20);
        let reopened = FileLedger::open(&scratch.0).expect("reopen ledger");
        assert_eq!(reopened.league().await, ledger.league().await);
    }
}
