/// Takes a snapshot of the role directory so a command never holds the lock across a Discord call.
#[macro_export]
macro_rules! directory {
    ($ctx: expr) => {
        {
            let directory = $ctx.data().directory.read().await;
            let out = directory.clone();

            out
        }
    }
}
