mod local_audio_store_test;
