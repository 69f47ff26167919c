#[macro_export]
macro_rules! impl_read_for_datatype {
    ($name:ident, $type:ty) => {
        fn $name(&mut self) -> Result<$type> {
            let width = std::mem::size_of::<$type>();
            let slice = self.read_slice(width)?;

            Ok(<$type>::from_be_bytes(slice.try_into()?))
        }
    };
}

#[macro_export]
macro_rules! impl_read_slice {
    () => {
        fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
            let slice = self
                .data
                .get(self.cursor..self.cursor + len)
                .ok_or_else(|| {
                    anyhow::anyhow!("EOF: read of {} bytes at offset {}", len, self.cursor)
                })?;

            self.cursor += len;

            Ok(slice)
        }
    };
}
